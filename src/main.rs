use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use book_nook::pages::{AuthorsPage, BooksPage, BorrowingsPage, CategoriesPage, PublishersPage};
use book_nook::{ApiClient, Config};

/// Smoke binary: mounts every page against the configured backend and
/// prints a plain-text summary of each collection.
#[tokio::main]
async fn main() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "book_nook=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    dotenvy::dotenv().ok();
    let config = Config::from_env();
    tracing::info!("using backend at {}", config.base_url);
    let client = ApiClient::new(&config);

    let mut books = BooksPage::new();
    books.mount(&client).await;
    println!("books: {} rows", books.page.rows().len());
    for book in books.page.rows() {
        println!(
            "  [{}] {} ({}), stock {}",
            book.id, book.name, book.publication_year, book.stock
        );
    }
    if let Some(message) = books.page.error.current() {
        println!("  error: {}", message);
    }

    let mut authors = AuthorsPage::new();
    authors.refresh(&client).await;
    println!("authors: {} rows", authors.rows().len());
    for author in authors.rows() {
        println!("  [{}] {} ({})", author.id, author.name, author.country);
    }
    if let Some(message) = authors.error.current() {
        println!("  error: {}", message);
    }

    let mut publishers = PublishersPage::new();
    publishers.refresh(&client).await;
    println!("publishers: {} rows", publishers.rows().len());
    for publisher in publishers.rows() {
        println!(
            "  [{}] {} ({})",
            publisher.id, publisher.name, publisher.establishment_year
        );
    }
    if let Some(message) = publishers.error.current() {
        println!("  error: {}", message);
    }

    let mut categories = CategoriesPage::new();
    categories.refresh(&client).await;
    println!("categories: {} rows", categories.rows().len());
    for category in categories.rows() {
        println!("  [{}] {}", category.id, category.name);
    }
    if let Some(message) = categories.error.current() {
        println!("  error: {}", message);
    }

    let mut borrowings = BorrowingsPage::new();
    borrowings.mount(&client).await;
    println!("borrowings: {} rows", borrowings.page.rows().len());
    for borrowing in borrowings.page.rows() {
        println!(
            "  [{}] {} <{}> since {}",
            borrowing.id,
            borrowing.borrower_name,
            borrowing.borrower_email,
            book_nook::util::normalize_date(&borrowing.borrowing_date)
        );
    }
    if let Some(message) = borrowings.page.error.current() {
        println!("  error: {}", message);
    }
}
