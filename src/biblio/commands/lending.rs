use chrono::{DateTime, Utc};

use crate::catalog::Catalog;
use crate::commands::{format_date, CmdMessage, CmdResult};
use crate::model::User;

/// `borrow ID`, any logged-in user; only legal on an available book.
pub fn borrow(catalog: &mut Catalog, user: &User, parts: &[&str], now: DateTime<Utc>) -> CmdResult {
    let Some(token) = parts.get(1) else {
        return CmdResult::with_message(CmdMessage::error("Usage: borrow [ID]"));
    };
    let Ok(id) = token.parse::<i32>() else {
        return CmdResult::with_message(CmdMessage::error("Invalid ID format in borrow command."));
    };
    let Some(book) = catalog.get_mut(id) else {
        return CmdResult::with_message(CmdMessage::error(format!(
            "No book found with ID {}.",
            id
        )));
    };
    if !book.is_available() {
        return CmdResult::with_message(CmdMessage::error(format!(
            "Book {} is already borrowed.",
            id
        )));
    }

    let due_date = book.borrow(&user.username, now);
    CmdResult::with_message(CmdMessage::success(format!(
        "Book {} borrowed by {} until {}.",
        id,
        user.username,
        format_date(due_date)
    )))
}

/// `return ID`; only the current borrower may return a book.
pub fn return_book(catalog: &mut Catalog, user: &User, parts: &[&str]) -> CmdResult {
    let Some(token) = parts.get(1) else {
        return CmdResult::with_message(CmdMessage::error("Usage: return [ID]"));
    };
    let Ok(id) = token.parse::<i32>() else {
        return CmdResult::with_message(CmdMessage::error("Invalid ID format in return command."));
    };
    let Some(book) = catalog.get_mut(id) else {
        return CmdResult::with_message(CmdMessage::error(format!(
            "No book found with ID {}.",
            id
        )));
    };
    let Some(loan) = &book.loan else {
        return CmdResult::with_message(CmdMessage::error(format!(
            "Book {} is not currently borrowed.",
            id
        )));
    };
    if loan.borrower != user.username {
        return CmdResult::with_message(CmdMessage::error(format!(
            "Book {} is borrowed by another user.",
            id
        )));
    }

    book.return_loan();
    CmdResult::with_message(CmdMessage::success(format!("Book {} returned.", id)))
}

/// `extend ID`; only the current borrower, at most once per loan.
///
/// An unknown id and a book that is not on loan both answer `Book not
/// found`; the merged message is part of the reply contract and stays.
pub fn extend(catalog: &mut Catalog, user: &User, parts: &[&str]) -> CmdResult {
    let Some(token) = parts.get(1) else {
        return CmdResult::with_message(CmdMessage::error("Usage: extend [ID]"));
    };
    let Ok(id) = token.parse::<i32>() else {
        return CmdResult::with_message(CmdMessage::error("Invalid ID format in extend command."));
    };
    let Some(book) = catalog.get_mut(id) else {
        return CmdResult::with_message(CmdMessage::error("Book not found"));
    };
    let Some(loan) = &book.loan else {
        return CmdResult::with_message(CmdMessage::error("Book not found"));
    };
    if loan.borrower != user.username {
        return CmdResult::with_message(CmdMessage::error(
            "Unauthorized: You are not the borrower",
        ));
    }
    if loan.extended {
        return CmdResult::with_message(CmdMessage::error("Extension limit reached"));
    }

    match book.extend_loan() {
        Some(due_date) => CmdResult::with_message(CmdMessage::success(format!(
            "Loan extended. New limit date: {}",
            format_date(due_date)
        ))),
        None => CmdResult::with_message(CmdMessage::error("Book not found")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn fixed_now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 3, 1, 12, 0, 0).unwrap()
    }

    fn seeded_catalog() -> Catalog {
        let mut catalog = Catalog::new();
        catalog.add_book(100, "Java", "Gosling", 1995);
        catalog
    }

    #[test]
    fn borrow_reports_user_and_due_date() {
        let mut catalog = seeded_catalog();
        let result = borrow(&mut catalog, &User::new("Alice"), &["borrow", "1"], fixed_now());
        assert_eq!(
            result.lines(),
            vec!["Book 1 borrowed by Alice until 08/03/2024."]
        );
        assert!(!catalog.get(1).unwrap().is_available());
    }

    #[test]
    fn borrow_requires_an_id() {
        let mut catalog = seeded_catalog();
        let result = borrow(&mut catalog, &User::new("Alice"), &["borrow"], fixed_now());
        assert_eq!(result.lines(), vec!["Usage: borrow [ID]"]);
    }

    #[test]
    fn borrow_rejects_malformed_ids() {
        let mut catalog = seeded_catalog();
        let result = borrow(&mut catalog, &User::new("Alice"), &["borrow", "abc"], fixed_now());
        assert_eq!(result.lines(), vec!["Invalid ID format in borrow command."]);
    }

    #[test]
    fn borrow_reports_unknown_ids() {
        let mut catalog = seeded_catalog();
        let result = borrow(&mut catalog, &User::new("Alice"), &["borrow", "9"], fixed_now());
        assert_eq!(result.lines(), vec!["No book found with ID 9."]);
    }

    #[test]
    fn borrowed_books_cannot_be_borrowed_again() {
        let mut catalog = seeded_catalog();
        borrow(&mut catalog, &User::new("Alice"), &["borrow", "1"], fixed_now());
        let result = borrow(&mut catalog, &User::new("Bob"), &["borrow", "1"], fixed_now());
        assert_eq!(result.lines(), vec!["Book 1 is already borrowed."]);
    }

    #[test]
    fn borrow_then_return_restores_availability() {
        let mut catalog = seeded_catalog();
        borrow(&mut catalog, &User::new("Alice"), &["borrow", "1"], fixed_now());
        let result = return_book(&mut catalog, &User::new("Alice"), &["return", "1"]);
        assert_eq!(result.lines(), vec!["Book 1 returned."]);
        let book = catalog.get(1).unwrap();
        assert!(book.is_available());
        assert_eq!(book.loan, None);
    }

    #[test]
    fn return_rejects_books_that_are_not_borrowed() {
        let mut catalog = seeded_catalog();
        let result = return_book(&mut catalog, &User::new("Alice"), &["return", "1"]);
        assert_eq!(result.lines(), vec!["Book 1 is not currently borrowed."]);
    }

    #[test]
    fn return_rejects_other_borrowers() {
        let mut catalog = seeded_catalog();
        borrow(&mut catalog, &User::new("Alice"), &["borrow", "1"], fixed_now());
        let result = return_book(&mut catalog, &User::new("Bob"), &["return", "1"]);
        assert_eq!(result.lines(), vec!["Book 1 is borrowed by another user."]);
        assert!(!catalog.get(1).unwrap().is_available());
    }

    #[test]
    fn extend_pushes_the_due_date_out_once() {
        let mut catalog = seeded_catalog();
        borrow(&mut catalog, &User::new("Alice"), &["borrow", "1"], fixed_now());
        let result = extend(&mut catalog, &User::new("Alice"), &["extend", "1"]);
        assert_eq!(
            result.lines(),
            vec!["Loan extended. New limit date: 15/03/2024"]
        );
    }

    #[test]
    fn second_extension_is_refused() {
        let mut catalog = seeded_catalog();
        borrow(&mut catalog, &User::new("Alice"), &["borrow", "1"], fixed_now());
        extend(&mut catalog, &User::new("Alice"), &["extend", "1"]);
        let result = extend(&mut catalog, &User::new("Alice"), &["extend", "1"]);
        assert_eq!(result.lines(), vec!["Extension limit reached"]);
    }

    #[test]
    fn extension_limit_resets_with_a_fresh_loan() {
        let mut catalog = seeded_catalog();
        borrow(&mut catalog, &User::new("Alice"), &["borrow", "1"], fixed_now());
        extend(&mut catalog, &User::new("Alice"), &["extend", "1"]);
        return_book(&mut catalog, &User::new("Alice"), &["return", "1"]);
        borrow(&mut catalog, &User::new("Alice"), &["borrow", "1"], fixed_now());
        let result = extend(&mut catalog, &User::new("Alice"), &["extend", "1"]);
        assert_eq!(
            result.lines(),
            vec!["Loan extended. New limit date: 15/03/2024"]
        );
    }

    #[test]
    fn unknown_id_and_unborrowed_book_share_one_message() {
        let mut catalog = seeded_catalog();
        let missing = extend(&mut catalog, &User::new("Alice"), &["extend", "9"]);
        let unborrowed = extend(&mut catalog, &User::new("Alice"), &["extend", "1"]);
        assert_eq!(missing.lines(), vec!["Book not found"]);
        assert_eq!(unborrowed.lines(), vec!["Book not found"]);
    }

    #[test]
    fn extend_rejects_other_borrowers() {
        let mut catalog = seeded_catalog();
        borrow(&mut catalog, &User::new("Alice"), &["borrow", "1"], fixed_now());
        let result = extend(&mut catalog, &User::new("Bob"), &["extend", "1"]);
        assert_eq!(result.lines(), vec!["Unauthorized: You are not the borrower"]);
    }
}
