//! Integration tests for the document store and portfolio repository.
//!
//! Exercises insertion, ordering, filtering, paging and the diagnostics
//! probes against a real database.

use folio_core::contact::ContactMessage;
use folio_core::pagination::PageRequest;
use folio_core::portfolio::{PortfolioCategory, PortfolioItem};
use folio_db::repositories::PortfolioRepo;
use folio_db::{diagnostics, DocumentStore};
use sqlx::PgPool;

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn new_item(category: PortfolioCategory, n: usize) -> PortfolioItem {
    PortfolioItem {
        title: Some(format!("Shot {n}")),
        category,
        src: format!("https://cdn.example.com/{n}.jpg"),
        caption: None,
        width: Some(1600),
        height: None,
    }
}

// ---------------------------------------------------------------------------
// Insert
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "./migrations")]
async fn insert_one_stores_document(pool: PgPool) {
    let item = new_item(PortfolioCategory::Interiors, 1);
    let id = DocumentStore::insert_one(&pool, &item).await.unwrap();

    let items = PortfolioRepo::list(&pool, None, &PageRequest::default())
        .await
        .unwrap();
    assert_eq!(items.len(), 1);
    assert_eq!(items[0].id, id);
    assert_eq!(items[0].document["category"], "Interiors");
    assert_eq!(items[0].document["src"], "https://cdn.example.com/1.jpg");
    assert_eq!(items[0].document["title"], "Shot 1");
}

#[sqlx::test(migrations = "./migrations")]
async fn contact_messages_go_to_their_own_collection(pool: PgPool) {
    let message = ContactMessage {
        name: "Ada".to_string(),
        email: "ada@example.com".to_string(),
        phone: None,
        message: "Hello there".to_string(),
    };
    DocumentStore::insert_one(&pool, &message).await.unwrap();

    let contacts: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM contactmessage")
        .fetch_one(&pool)
        .await
        .unwrap();
    assert_eq!(contacts, 1);
    assert_eq!(PortfolioRepo::count(&pool, None).await.unwrap(), 0);
}

#[sqlx::test(migrations = "./migrations")]
async fn insert_many_returns_ids_in_input_order(pool: PgPool) {
    let items: Vec<_> = (0..3)
        .map(|n| new_item(PortfolioCategory::Exteriors, n))
        .collect();
    let ids = DocumentStore::insert_many(&pool, &items).await.unwrap();
    assert_eq!(ids.len(), 3);

    for (n, id) in ids.iter().enumerate() {
        let src: String =
            sqlx::query_scalar("SELECT document ->> 'src' FROM portfolioitem WHERE id = $1")
                .bind(id)
                .fetch_one(&pool)
                .await
                .unwrap();
        assert_eq!(src, format!("https://cdn.example.com/{n}.jpg"));
    }
}

#[sqlx::test(migrations = "./migrations")]
async fn insert_many_with_empty_batch_is_a_no_op(pool: PgPool) {
    let ids = DocumentStore::insert_many::<PortfolioItem>(&pool, &[])
        .await
        .unwrap();
    assert!(ids.is_empty());
    assert_eq!(PortfolioRepo::count(&pool, None).await.unwrap(), 0);
}

#[sqlx::test(migrations = "./migrations")]
async fn insert_many_rolls_back_when_a_later_insert_fails(pool: PgPool) {
    sqlx::query(
        "ALTER TABLE portfolioitem \
         ADD CONSTRAINT no_shot_two CHECK (document ->> 'title' <> 'Shot 2')",
    )
    .execute(&pool)
    .await
    .unwrap();

    let items: Vec<PortfolioItem> = (0..4)
        .map(|n| new_item(PortfolioCategory::Exteriors, n))
        .collect();
    let result = DocumentStore::insert_many(&pool, &items).await;

    assert!(result.is_err());
    assert_eq!(PortfolioRepo::count(&pool, None).await.unwrap(), 0);
}

// ---------------------------------------------------------------------------
// Listing
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "./migrations")]
async fn list_is_newest_first(pool: PgPool) {
    for n in 0..3 {
        DocumentStore::insert_one(&pool, &new_item(PortfolioCategory::Interiors, n))
            .await
            .unwrap();
    }

    let items = PortfolioRepo::list(&pool, None, &PageRequest::default())
        .await
        .unwrap();
    let titles: Vec<_> = items
        .iter()
        .map(|d| d.document["title"].as_str().unwrap().to_string())
        .collect();
    assert_eq!(titles, vec!["Shot 2", "Shot 1", "Shot 0"]);
}

#[sqlx::test(migrations = "./migrations")]
async fn list_filters_by_category(pool: PgPool) {
    DocumentStore::insert_one(&pool, &new_item(PortfolioCategory::DroneAerial, 1))
        .await
        .unwrap();
    DocumentStore::insert_one(&pool, &new_item(PortfolioCategory::Interiors, 2))
        .await
        .unwrap();
    DocumentStore::insert_one(&pool, &new_item(PortfolioCategory::DroneAerial, 3))
        .await
        .unwrap();

    let drone = PortfolioRepo::list(&pool, Some("Drone / Aerial"), &PageRequest::default())
        .await
        .unwrap();
    assert_eq!(drone.len(), 2);
    assert!(drone.iter().all(|d| d.document["category"] == "Drone / Aerial"));
    assert_eq!(
        PortfolioRepo::count(&pool, Some("Drone / Aerial")).await.unwrap(),
        2
    );
    assert_eq!(PortfolioRepo::count(&pool, Some("Bogus")).await.unwrap(), 0);
}

#[sqlx::test(migrations = "./migrations")]
async fn second_page_holds_the_remainder(pool: PgPool) {
    let items: Vec<_> = (0..20)
        .map(|n| new_item(PortfolioCategory::CommercialSpaces, n))
        .collect();
    DocumentStore::insert_many(&pool, &items).await.unwrap();

    let page_two = PageRequest::new(Some(2), Some(18));
    let rows = PortfolioRepo::list(&pool, None, &page_two).await.unwrap();
    assert_eq!(rows.len(), 2);
    // Newest first, so the remainder is the two oldest.
    assert_eq!(rows[0].document["title"], "Shot 1");
    assert_eq!(rows[1].document["title"], "Shot 0");
    assert_eq!(PortfolioRepo::count(&pool, None).await.unwrap(), 20);
}

// ---------------------------------------------------------------------------
// Diagnostics
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "./migrations")]
async fn diagnostics_report_collections(pool: PgPool) {
    let collections = diagnostics::list_collections(&pool, 10).await.unwrap();
    assert_eq!(collections, vec!["contactmessage", "portfolioitem"]);

    let name = diagnostics::database_name(&pool).await.unwrap();
    assert!(!name.is_empty());

    folio_db::health_check(&pool).await.unwrap();
}
