use migration::MigratorTrait;
use sea_orm::{ConnectOptions, Database};

use service::catalog::domain::Bird;
use service::catalog::errors::StoreError;
use service::catalog::repo::seaorm::SeaOrmBirdStore;
use service::catalog::repository::mock::{MockBirdStore, StoreCall};
use service::catalog::repository::BirdStore;

fn bird(species: &str, description: &str) -> Bird {
    Bird { species: species.into(), description: description.into() }
}

/// In-memory SQLite keeps the table alive only as long as its single
/// connection, so the pool is pinned to one connection.
async fn sqlite_store() -> anyhow::Result<SeaOrmBirdStore> {
    let mut opt = ConnectOptions::new("sqlite::memory:".to_owned());
    opt.max_connections(1).min_connections(1);
    let db = Database::connect(opt).await?;
    migration::Migrator::up(&db, None).await?;
    Ok(SeaOrmBirdStore { db })
}

#[tokio::test]
async fn get_birds_on_empty_table_returns_empty_vec() -> anyhow::Result<()> {
    let store = sqlite_store().await?;
    let birds = store.get_birds().await?;
    assert!(birds.is_empty());
    Ok(())
}

#[tokio::test]
async fn create_is_visible_to_immediate_get() -> anyhow::Result<()> {
    let store = sqlite_store().await?;
    store.create_bird(&bird("Owl", "Nocturnal")).await?;
    let birds = store.get_birds().await?;
    assert_eq!(birds, vec![bird("Owl", "Nocturnal")]);
    Ok(())
}

#[tokio::test]
async fn all_created_birds_come_back() -> anyhow::Result<()> {
    let store = sqlite_store().await?;
    let created = vec![
        bird("Owl", "Nocturnal"),
        bird("Swift", "Fast flier"),
        bird("Owl", "Nocturnal"), // duplicates are allowed
        bird("Kiwi", ""),
    ];
    for b in &created {
        store.create_bird(b).await?;
    }

    let mut listed = store.get_birds().await?;
    assert_eq!(listed.len(), created.len());

    // Order is storage-defined; compare as multisets.
    let mut expected = created;
    listed.sort_by(|a, b| (&a.species, &a.description).cmp(&(&b.species, &b.description)));
    expected.sort_by(|a, b| (&a.species, &a.description).cmp(&(&b.species, &b.description)));
    assert_eq!(listed, expected);
    Ok(())
}

#[tokio::test]
async fn empty_fields_are_stored_as_empty_strings() -> anyhow::Result<()> {
    let store = sqlite_store().await?;
    store.create_bird(&bird("", "")).await?;
    let birds = store.get_birds().await?;
    assert_eq!(birds, vec![bird("", "")]);
    Ok(())
}

#[tokio::test]
async fn store_error_when_table_is_missing() -> anyhow::Result<()> {
    // Skip the migration so both operations hit a missing table.
    let mut opt = ConnectOptions::new("sqlite::memory:".to_owned());
    opt.max_connections(1).min_connections(1);
    let db = Database::connect(opt).await?;
    let store = SeaOrmBirdStore { db };

    let err = store.get_birds().await.unwrap_err();
    assert!(matches!(err, StoreError::Persistence(_)));

    let err = store.create_bird(&bird("Owl", "Nocturnal")).await.unwrap_err();
    assert!(matches!(err, StoreError::Persistence(_)));
    Ok(())
}

#[tokio::test]
async fn mock_records_calls_in_order() {
    let store = MockBirdStore::new();
    store.create_bird(&bird("Owl", "Nocturnal")).await.unwrap();
    store.get_birds().await.unwrap();

    assert_eq!(
        store.calls(),
        vec![
            StoreCall::CreateBird(bird("Owl", "Nocturnal")),
            StoreCall::GetBirds,
        ]
    );
}

#[tokio::test]
async fn mock_returns_programmed_responses() {
    let store = MockBirdStore::new();
    store.on_get_birds(vec![bird("Swift", "Fast flier")], None);
    assert_eq!(store.get_birds().await.unwrap(), vec![bird("Swift", "Fast flier")]);

    store.on_get_birds(Vec::new(), Some(StoreError::Persistence("connection lost".into())));
    assert!(store.get_birds().await.is_err());

    store.on_create_bird(Some(StoreError::Persistence("disk full".into())));
    assert!(store.create_bird(&bird("Owl", "Nocturnal")).await.is_err());
}

#[tokio::test]
async fn mock_defaults_to_success_and_empty_list() {
    let store = MockBirdStore::new();
    assert!(store.create_bird(&bird("Owl", "Nocturnal")).await.is_ok());
    assert_eq!(store.get_birds().await.unwrap(), Vec::<Bird>::new());
}
