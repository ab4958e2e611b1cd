//! Per-resource page state, one value per visited page.
//!
//! Authors, publishers, and categories are plain [`ResourcePage`]
//! instantiations. Books and borrowings additionally carry the support
//! collections their foreign-key selectors draw from; a selector is
//! unavailable until its collection has arrived, and the mount fetches run
//! concurrently with no ordering guarantee between them.

use crate::client::ApiClient;
use crate::controller::ResourcePage;
use crate::models::{
    Author, Authors, Book, Books, Borrowings, Categories, Category, Publisher, Publishers,
};

pub type AuthorsPage = ResourcePage<Authors>;
pub type PublishersPage = ResourcePage<Publishers>;
pub type CategoriesPage = ResourcePage<Categories>;

pub struct BooksPage {
    pub page: ResourcePage<Books>,
    authors: Option<Vec<Author>>,
    publishers: Option<Vec<Publisher>>,
    categories: Option<Vec<Category>>,
}

impl Default for BooksPage {
    fn default() -> Self {
        Self::new()
    }
}

impl BooksPage {
    pub fn new() -> Self {
        Self {
            page: ResourcePage::new(),
            authors: None,
            publishers: None,
            categories: None,
        }
    }

    /// Fetch the book collection and the three selector collections
    /// concurrently. Any completion order is fine; a failed support fetch
    /// leaves its selector unavailable and reports the failure.
    pub async fn mount(&mut self, client: &ApiClient) {
        let (_, authors, publishers, categories) = tokio::join!(
            self.page.refresh(client),
            client.list::<Authors>(),
            client.list::<Publishers>(),
            client.list::<Categories>(),
        );

        match authors {
            Ok(rows) => self.authors = Some(rows),
            Err(_) => self.page.error.set("Failed to fetch authors".to_string()),
        }
        match publishers {
            Ok(rows) => self.publishers = Some(rows),
            Err(_) => self
                .page
                .error
                .set("Failed to fetch publishers".to_string()),
        }
        match categories {
            Ok(rows) => self.categories = Some(rows),
            Err(_) => self
                .page
                .error
                .set("Failed to fetch categories".to_string()),
        }
    }

    /// `None` until the authors collection has arrived.
    pub fn author_options(&self) -> Option<&[Author]> {
        self.authors.as_deref()
    }

    pub fn publisher_options(&self) -> Option<&[Publisher]> {
        self.publishers.as_deref()
    }

    pub fn category_options(&self) -> Option<&[Category]> {
        self.categories.as_deref()
    }
}

pub struct BorrowingsPage {
    pub page: ResourcePage<Borrowings>,
    books: Option<Vec<Book>>,
}

impl Default for BorrowingsPage {
    fn default() -> Self {
        Self::new()
    }
}

impl BorrowingsPage {
    pub fn new() -> Self {
        Self {
            page: ResourcePage::new(),
            books: None,
        }
    }

    pub async fn mount(&mut self, client: &ApiClient) {
        let (_, books) = tokio::join!(self.page.refresh(client), client.list::<Books>());

        match books {
            Ok(rows) => self.books = Some(rows),
            Err(_) => self.page.error.set("Failed to fetch books".to_string()),
        }
    }

    /// `None` until the books collection has arrived; the selector is only
    /// needed when creating, since the reference is immutable afterwards.
    pub fn book_options(&self) -> Option<&[Book]> {
        self.books.as_deref()
    }
}
