use chrono::{DateTime, Duration, Utc};

/// A loan (and a loan extension) lasts exactly this many days.
pub const LOAN_DAYS: i64 = 7;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Role {
    Member,
    Admin,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    pub username: String,
    pub role: Role,
}

impl User {
    /// The reserved name `admin` is the only identity with admin rights.
    pub fn new(username: impl Into<String>) -> Self {
        let username = username.into();
        let role = if username == "admin" {
            Role::Admin
        } else {
            Role::Member
        };
        Self { username, role }
    }

    pub fn is_admin(&self) -> bool {
        self.role == Role::Admin
    }
}

/// Loan state attached to a book while it is borrowed. Dropped entirely on
/// return, so a book with `loan == None` carries no residual loan data.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Loan {
    /// Identity name of the borrower, compared by equality.
    pub borrower: String,
    pub due_date: DateTime<Utc>,
    /// A loan may be extended at most once.
    pub extended: bool,
}

impl Loan {
    pub fn new(borrower: impl Into<String>, now: DateTime<Utc>) -> Self {
        Self {
            borrower: borrower.into(),
            due_date: now + Duration::days(LOAN_DAYS),
            extended: false,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Book {
    /// Unique, assigned sequentially by the catalog, immutable afterwards.
    pub id: i32,
    /// Not unique: copies of one logical title are independent records.
    pub isbn: i64,
    pub title: String,
    pub author: String,
    pub year_published: i32,
    pub loan: Option<Loan>,
}

impl Book {
    pub fn new(id: i32, isbn: i64, title: String, author: String, year_published: i32) -> Self {
        Self {
            id,
            isbn,
            title,
            author,
            year_published,
            loan: None,
        }
    }

    pub fn is_available(&self) -> bool {
        self.loan.is_none()
    }

    /// Starts a loan for `borrower` due in [`LOAN_DAYS`] days and returns
    /// the due date.
    pub fn borrow(&mut self, borrower: &str, now: DateTime<Utc>) -> DateTime<Utc> {
        let loan = Loan::new(borrower, now);
        let due_date = loan.due_date;
        self.loan = Some(loan);
        due_date
    }

    /// Clears all loan state, making the book available again.
    pub fn return_loan(&mut self) {
        self.loan = None;
    }

    /// Pushes the due date out by another [`LOAN_DAYS`] days and marks the
    /// loan as extended. A no-op returning `None` when the book is not on
    /// loan; callers reject that case with a user-facing message first.
    pub fn extend_loan(&mut self) -> Option<DateTime<Utc>> {
        let loan = self.loan.as_mut()?;
        loan.due_date = loan.due_date + Duration::days(LOAN_DAYS);
        loan.extended = true;
        Some(loan.due_date)
    }
}
