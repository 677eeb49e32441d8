//! The in-memory catalog of books and authors.
//!
//! The catalog is fixed at compile time and never mutated; every lookup hands out `'static`
//! references in store order.

use std::fmt::{Display, Formatter, Result as FmtResult};

/// A book. Every book has exactly one author.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Book {
    /// Primary key.
    pub id: i32,
    /// The title of the book.
    pub title: &'static str,
    /// The [`Author::id`] of the author. Not checked; a dangling reference resolves to no author.
    pub author_id: i32,
}

/// An author.
///
/// The [`Display`] implementation renders the full name, i.e. the first and last name separated
/// by a single space.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Author {
    /// Primary key.
    pub id: i32,
    /// The author's first name.
    pub firstname: &'static str,
    /// The author's last name.
    pub lastname: &'static str,
}

impl Display for Author {
    #[inline]
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(f, "{} {}", self.firstname, self.lastname)
    }
}

/// A read-only view over a set of books and authors.
#[derive(Clone, Copy, Debug)]
pub struct Catalog {
    /// All books, in insertion order.
    books: &'static [Book],
    /// All authors, in insertion order.
    authors: &'static [Author],
}

impl Catalog {
    /// Create a catalog over the given records.
    #[inline]
    #[must_use]
    pub const fn new(books: &'static [Book], authors: &'static [Author]) -> Self {
        Self { books, authors }
    }

    /// All books in store order.
    #[inline]
    #[must_use]
    pub const fn books(&self) -> &'static [Book] {
        self.books
    }

    /// All authors in store order.
    #[inline]
    #[must_use]
    pub const fn authors(&self) -> &'static [Author] {
        self.authors
    }

    /// The first book with the given id, if any.
    #[inline]
    #[must_use]
    pub fn book(&self, id: i32) -> Option<&'static Book> {
        self.books.iter().find(|book| book.id == id)
    }

    /// All authors with the given id. Ids are unique, so this yields at most one author for any
    /// well-formed catalog.
    #[inline]
    pub fn authors_with_id(&self, id: i32) -> impl Iterator<Item = &'static Author> {
        self.authors.iter().filter(move |author| author.id == id)
    }

    /// All authors whose last name is exactly `lastname`. The comparison is case-sensitive.
    #[inline]
    pub fn authors_by_lastname(&self, lastname: &str) -> impl Iterator<Item = &'static Author> {
        self.authors
            .iter()
            .filter(move |author| author.lastname == lastname)
    }

    /// All authors whose first and last names are exactly `firstname` and `lastname`.
    #[inline]
    pub fn authors_by_name(
        &self,
        firstname: &str,
        lastname: &str,
    ) -> impl Iterator<Item = &'static Author> {
        self.authors
            .iter()
            .filter(move |author| author.firstname == firstname && author.lastname == lastname)
    }

    /// All books written by `author`.
    #[inline]
    pub fn books_by(&self, author: &Author) -> impl Iterator<Item = &'static Book> {
        let id = author.id;
        self.books.iter().filter(move |book| book.author_id == id)
    }

    /// The author of `book`, or [`None`] if the book refers to an author not in the catalog.
    #[inline]
    #[must_use]
    pub fn author_of(&self, book: &Book) -> Option<&'static Author> {
        self.authors.iter().find(|author| author.id == book.author_id)
    }
}

/// The catalog served by the API.
pub static SEED: Catalog = Catalog::new(&BOOKS, &AUTHORS);

/// Books of [`SEED`].
static BOOKS: [Book; 23] = [
    book(1, "Harry Potter and the Philosophers Stone", 2),
    book(2, "Harry Potter and the Chamber of Secrets", 2),
    book(3, "Harry Potter and the Prisoner of Azkaban", 2),
    book(4, "Harry Potter and the Goblet of Fire", 2),
    book(5, "Harry Potter and the Order of the Phoenix", 2),
    book(6, "Harry Potter and the Half Blood Prince", 2),
    book(7, "Harry Potter and the Deathly Hallows", 2),
    book(8, "Jurassic Park", 3),
    book(9, "Angels and Demons", 1),
    book(10, "The DaVinci Code", 1),
    book(11, "The Manchurian Candidate", 5),
    book(12, "The Bourne Identity", 5),
    book(13, "The Bourne Supremacy", 5),
    book(14, "The Hobbit", 4),
    book(15, "The Fellowship of the Ring", 4),
    book(16, "The Two Towers", 4),
    book(17, "The Return of the King", 4),
    book(18, "Arthur's Mystery Envelope", 6),
    book(19, "Arthur and the Scare-Your-Pants-Off Club", 6),
    book(20, "Arthur Makes the Team", 6),
    book(21, "Arthur and the Crunch Cereal Contest", 6),
    book(22, "Arthur Accused!", 6),
    book(23, "Locked in the Library!", 6),
];

/// Authors of [`SEED`].
static AUTHORS: [Author; 6] = [
    author(1, "Dan", "Brown"),
    author(2, "J.K.", "Rowling"),
    author(3, "Michael", "Crichton"),
    author(4, "J.R.R.", "Tolkein"),
    author(5, "Robert", "Ludlum"),
    author(6, "Marc", "Brown"),
];

/// Shorthand for the seed tables.
const fn book(id: i32, title: &'static str, author_id: i32) -> Book {
    Book {
        id,
        title,
        author_id,
    }
}

/// Shorthand for the seed tables.
const fn author(id: i32, firstname: &'static str, lastname: &'static str) -> Author {
    Author {
        id,
        firstname,
        lastname,
    }
}
