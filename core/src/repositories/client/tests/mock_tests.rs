use pv_shared::config::ValidationConfig;
use rust_decimal_macros::dec;

use crate::domain::entities::client::Client;
use crate::errors::DomainError;
use crate::repositories::client::{ClientRepository, MockClientRepository};

fn new_client(name: &str, email: &str) -> Client {
    Client::create(name, email, &ValidationConfig::default()).unwrap()
}

#[tokio::test]
async fn test_save_assigns_sequential_ids() {
    let repo = MockClientRepository::new();

    let first = repo.save(new_client("John Doe", "john@example.com")).await.unwrap();
    let second = repo.save(new_client("Jane Doe", "jane@example.com")).await.unwrap();

    assert_eq!(first.id(), Some(1));
    assert_eq!(second.id(), Some(2));
}

#[tokio::test]
async fn test_save_rejects_duplicate_email() {
    let repo = MockClientRepository::new();
    repo.save(new_client("John Doe", "john@example.com")).await.unwrap();

    let error = repo
        .save(new_client("Impostor", "john@example.com"))
        .await
        .unwrap_err();
    assert!(matches!(error, DomainError::Duplicate { .. }));
}

#[tokio::test]
async fn test_find_by_email_and_id() {
    let repo = MockClientRepository::new();
    let saved = repo.save(new_client("John Doe", "john@example.com")).await.unwrap();

    let by_email = repo.find_by_email("john@example.com").await.unwrap().unwrap();
    assert_eq!(by_email.id(), saved.id());

    assert!(repo.find_by_id(999).await.unwrap().is_none());
}

#[tokio::test]
async fn test_update_roundtrip() {
    let repo = MockClientRepository::new();
    let mut saved = repo.save(new_client("John Doe", "john@example.com")).await.unwrap();

    saved.deposit(dec!(100), &ValidationConfig::default()).unwrap();
    repo.update(saved.clone()).await.unwrap();

    let reloaded = repo.find_by_id(saved.id().unwrap()).await.unwrap().unwrap();
    assert_eq!(reloaded.balance(), dec!(100));
}

#[tokio::test]
async fn test_update_unknown_client_fails() {
    let repo = MockClientRepository::new();
    let ghost = Client::from_persistence(404, "Ghost", "ghost@example.com", dec!(0));

    let error = repo.update(ghost).await.unwrap_err();
    assert!(matches!(error, DomainError::NotFound { .. }));
}

#[tokio::test]
async fn test_delete_reports_outcome() {
    let repo = MockClientRepository::new();
    let saved = repo.save(new_client("John Doe", "john@example.com")).await.unwrap();

    assert!(repo.delete(saved.id().unwrap()).await.unwrap());
    assert!(!repo.delete(saved.id().unwrap()).await.unwrap());
}
