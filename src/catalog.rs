//! The book catalog and its title search.
//!
//! The catalog is a `'static` slice of [`BookRecord`]s fixed at compile time.
//! [`Catalog`] is a `Copy` handle over that slice, so every request handler
//! reads the same records without locking.

use serde::{Serialize, Serializer};

/// One catalog entry.
///
/// Serializes with every value as a JSON string, `availability` included
/// (`"true"` / `"false"`), which is the shape existing clients read.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct BookRecord {
    pub id: &'static str,
    pub title: &'static str,
    pub author: &'static str,
    pub genre: &'static str,
    /// ISO-style date literal, kept verbatim.
    pub published_date: &'static str,
    pub isbn: &'static str,
    #[serde(serialize_with = "bool_as_string")]
    pub availability: bool,
}

fn bool_as_string<S: Serializer>(value: &bool, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_str(if *value { "true" } else { "false" })
}

const fn book(
    id: &'static str,
    title: &'static str,
    author: &'static str,
    genre: &'static str,
    published_date: &'static str,
    isbn: &'static str,
    availability: bool,
) -> BookRecord {
    BookRecord { id, title, author, genre, published_date, isbn, availability }
}

static BUILTIN_BOOKS: [BookRecord; 10] = [
    book("1", "To Kill a Mockingbird", "Harper Lee", "Fiction", "1960-07-11", "9780061120084", true),
    book("2", "1984", "George Orwell", "Dystopian", "1949-06-08", "9780451524935", true),
    book("3", "The Great Gatsby", "F. Scott Fitzgerald", "Classic", "1925-04-10", "9780743273565", false),
    book("4", "Moby Dick", "Herman Melville", "Adventure", "1851-10-18", "9781503280786", true),
    book("5", "Pride and Prejudice", "Jane Austen", "Romance", "1813-01-28", "9781503290563", false),
    book("6", "The Catcher in the Rye", "J.D. Salinger", "Fiction", "1951-07-16", "9780316769488", true),
    book("7", "Brave New World", "Aldous Huxley", "Science Fiction", "1932-08-31", "9780060850524", true),
    book("8", "The Hobbit", "J.R.R. Tolkien", "Fantasy", "1937-09-21", "9780547928227", false),
    book("9", "Crime and Punishment", "Fyodor Dostoevsky", "Philosophical Fiction", "1866-01-01", "9780486415871", true),
    book("10", "War and Peace", "Leo Tolstoy", "Historical Fiction", "1869-01-01", "9781853260629", false),
];

/// Read-only view over an immutable, ordered set of books.
#[derive(Debug, Clone, Copy)]
pub struct Catalog {
    books: &'static [BookRecord],
}

impl Catalog {
    /// The ten books served by the application.
    pub fn builtin() -> Self {
        Self::from_static(&BUILTIN_BOOKS)
    }

    pub fn from_static(books: &'static [BookRecord]) -> Self {
        Self { books }
    }

    pub fn len(&self) -> usize {
        self.books.len()
    }

    pub fn is_empty(&self) -> bool {
        self.books.is_empty()
    }

    /// Books in catalog order.
    pub fn iter(&self) -> impl Iterator<Item = &'static BookRecord> + use<> {
        let books: &'static [BookRecord] = self.books;
        books.iter()
    }

    /// Books whose title contains `search`, ignoring case.
    ///
    /// A missing or empty term returns the whole catalog. Matches keep their
    /// catalog order. Never fails; an unmatched term yields an empty `Vec`.
    pub fn query(&self, search: Option<&str>) -> Vec<BookRecord> {
        let Some(term) = search.filter(|s| !s.is_empty()) else {
            return self.books.to_vec();
        };

        let needle = term.to_lowercase();
        self.books
            .iter()
            .filter(|book| book.title.to_lowercase().contains(&needle))
            .copied()
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    fn ids(books: &[BookRecord]) -> Vec<&'static str> {
        books.iter().map(|b| b.id).collect()
    }

    #[test]
    fn builtin_has_ten_unique_ids() {
        let catalog = Catalog::builtin();
        assert_eq!(catalog.len(), 10);
        let unique: HashSet<_> = catalog.iter().map(|b| b.id).collect();
        assert_eq!(unique.len(), 10);
    }

    #[test]
    fn no_term_returns_everything_in_order() {
        let all = Catalog::builtin().query(None);
        assert_eq!(all.len(), 10);
        assert_eq!(all[0].id, "1");
        assert_eq!(all[0].title, "To Kill a Mockingbird");
        assert_eq!(all[9].id, "10");
        assert_eq!(all[9].title, "War and Peace");
    }

    #[test]
    fn empty_term_same_as_none() {
        let catalog = Catalog::builtin();
        assert_eq!(catalog.query(Some("")), catalog.query(None));
    }

    #[test]
    fn lowercase_the_matches_three_titles() {
        let hits = Catalog::builtin().query(Some("the"));
        assert_eq!(ids(&hits), ["3", "6", "8"]);
    }

    #[test]
    fn uppercase_full_title_matches() {
        let hits = Catalog::builtin().query(Some("THE HOBBIT"));
        assert_eq!(ids(&hits), ["8"]);
    }

    #[test]
    fn unmatched_term_is_empty_not_missing() {
        assert!(Catalog::builtin().query(Some("zzz-no-match")).is_empty());
    }

    #[test]
    fn match_is_substring_not_word() {
        // "ice" sits inside "Prejudice" only.
        assert_eq!(ids(&Catalog::builtin().query(Some("ice"))), ["5"]);
        // digits and inner whitespace are plain characters too
        assert_eq!(ids(&Catalog::builtin().query(Some("98"))), ["2"]);
        assert_eq!(ids(&Catalog::builtin().query(Some("d pr"))), ["5"]);
    }

    #[test]
    fn odd_input_does_not_fail() {
        let catalog = Catalog::builtin();
        for term in ["%", "'; drop table books; --", "\u{0}", "ÄÖÜ", "🦀", " "] {
            let hits = catalog.query(Some(term));
            assert!(hits.iter().all(|b| b.title.to_lowercase().contains(&term.to_lowercase())));
        }
        // a single space appears in every title except "1984"
        assert_eq!(catalog.query(Some(" ")).len(), 9);
    }

    #[test]
    fn partition_holds_for_every_term() {
        let catalog = Catalog::builtin();
        for term in ["a", "an", "THE", "war", "o", "moby dick", "x", "Rye"] {
            let hits = catalog.query(Some(term));
            let needle = term.to_lowercase();
            for book in catalog.iter() {
                let matches = book.title.to_lowercase().contains(&needle);
                assert_eq!(hits.contains(book), matches, "term {term:?}, book {}", book.id);
            }
        }
    }

    #[test]
    fn hits_keep_catalog_order() {
        let catalog = Catalog::builtin();
        let position = |id: &str| catalog.iter().position(|b| b.id == id).unwrap();
        for term in ["a", "e", "the", "r"] {
            let order: Vec<_> = catalog.query(Some(term)).iter().map(|b| position(b.id)).collect();
            assert!(order.windows(2).all(|w| w[0] < w[1]), "term {term:?}: {order:?}");
        }
    }

    #[test]
    fn repeated_queries_agree() {
        let catalog = Catalog::builtin();
        let first = catalog.query(Some("an"));
        for _ in 0..5 {
            assert_eq!(catalog.query(Some("an")), first);
        }
    }

    #[test]
    fn query_leaves_catalog_untouched() {
        let catalog = Catalog::builtin();
        let _ = catalog.query(Some("the"));
        assert_eq!(catalog.query(None), BUILTIN_BOOKS.to_vec());
    }

    #[test]
    fn custom_catalog() {
        static SHELF: [BookRecord; 2] = [
            book("a", "Dune", "Frank Herbert", "Science Fiction", "1965-08-01", "9780441013593", true),
            book("b", "Dune Messiah", "Frank Herbert", "Science Fiction", "1969-10-15", "9780593098233", false),
        ];
        let catalog = Catalog::from_static(&SHELF);
        assert_eq!(ids(&catalog.query(Some("dune"))), ["a", "b"]);
        assert_eq!(ids(&catalog.query(Some("MESSIAH"))), ["b"]);

        let empty = Catalog::from_static(&[]);
        assert!(empty.is_empty());
        assert!(empty.query(None).is_empty());
    }

    #[test]
    fn availability_serializes_as_string() {
        let json = serde_json::to_value(Catalog::builtin().query(Some("gatsby"))).unwrap();
        assert_eq!(
            json,
            serde_json::json!([{
                "id": "3",
                "title": "The Great Gatsby",
                "author": "F. Scott Fitzgerald",
                "genre": "Classic",
                "published_date": "1925-04-10",
                "isbn": "9780743273565",
                "availability": "false",
            }])
        );
    }
}
