//! The in-memory book collection.
//!
//! Insertion order is the display order for every listing command, so books
//! live in a plain `Vec` and lookups are linear scans; ids are unique and
//! immutable, so an id-indexed map is a safe swap if the catalog ever grows.
//! Ids are handed out sequentially starting at 1 and are never reused, not
//! even after a removal.

use crate::model::Book;

#[derive(Debug)]
pub struct Catalog {
    books: Vec<Book>,
    next_id: i32,
}

impl Catalog {
    pub fn new() -> Self {
        Self {
            books: Vec::new(),
            next_id: 1,
        }
    }

    /// Registers one book record and returns its freshly assigned id.
    ///
    /// There is no uniqueness constraint on ISBN: adding N copies of one
    /// logical title creates N independent records with distinct ids.
    pub fn add_book(&mut self, isbn: i64, title: &str, author: &str, year_published: i32) -> i32 {
        let id = self.next_id;
        self.next_id += 1;
        self.books.push(Book::new(
            id,
            isbn,
            title.to_string(),
            author.to_string(),
            year_published,
        ));
        id
    }

    pub fn get(&self, id: i32) -> Option<&Book> {
        self.books.iter().find(|b| b.id == id)
    }

    pub fn get_mut(&mut self, id: i32) -> Option<&mut Book> {
        self.books.iter_mut().find(|b| b.id == id)
    }

    /// Removes the book with the given id; reports whether one existed.
    pub fn remove(&mut self, id: i32) -> bool {
        match self.books.iter().position(|b| b.id == id) {
            Some(pos) => {
                self.books.remove(pos);
                true
            }
            None => false,
        }
    }

    /// All books, in insertion order.
    pub fn books(&self) -> &[Book] {
        &self.books
    }

    pub fn is_empty(&self) -> bool {
        self.books.is_empty()
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::new()
    }
}
