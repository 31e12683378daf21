//! tests/api/submission_form.rs

use crate::helpers::spawn_app;
use waitlist::submission_form::{
    SubmissionForm, SubmissionStatus, NETWORK_ERROR_MESSAGE, SUCCESS_MESSAGE,
};
use waitlist::waitlist_client::WaitlistClient;

fn form(name: &str, email: &str) -> SubmissionForm {
    let mut form = SubmissionForm::new();
    form.set_name(name);
    form.set_email(email);
    form
}

#[tokio::test]
async fn successful_submission_clears_the_form() {
    // Arrange
    let test_app = spawn_app().await;
    let client = test_app.waitlist_client();
    let mut form = form("Ada", "ada@example.com");

    // Act
    form.submit(&client).await.unwrap();

    // Assert
    assert_eq!(
        form.status(),
        &SubmissionStatus::Succeeded(SUCCESS_MESSAGE.to_owned())
    );
    assert_eq!(form.name(), "");
    assert_eq!(form.email(), "");
    assert_eq!(test_app.stored_entries().await.len(), 1);
}

#[tokio::test]
async fn rejected_submission_keeps_the_values_and_shows_the_server_message() {
    // Arrange
    let test_app = spawn_app().await;
    let client = test_app.waitlist_client();
    let mut form = form("Ada", "ada.example.com");

    // Act
    form.submit(&client).await.unwrap();

    // Assert
    assert_eq!(
        form.status(),
        &SubmissionStatus::Failed("Please enter a valid email".to_owned())
    );
    assert_eq!(form.name(), "Ada");
    assert_eq!(form.email(), "ada.example.com");
}

#[tokio::test]
async fn resubmitting_a_registered_email_shows_the_duplicate_message() {
    // Arrange
    let test_app = spawn_app().await;
    let client = test_app.waitlist_client();
    let mut first = form("Ada", "ada@example.com");
    let mut second = form("Ada L.", "ada@example.com");

    // Act
    first.submit(&client).await.unwrap();
    second.submit(&client).await.unwrap();

    // Assert
    assert_eq!(first.message(), Some(SUCCESS_MESSAGE));
    assert_eq!(second.message(), Some("Email already registered"));
    assert_eq!(second.name(), "Ada L.");
    assert_eq!(test_app.stored_entries().await.len(), 1);
}

#[tokio::test]
async fn unreachable_service_shows_the_network_error() {
    // Arrange
    let test_app = spawn_app().await;
    // right host, wrong scheme: the connection can't be established
    let client = WaitlistClient::new(format!("https://127.0.0.1:{}", test_app.port));
    let mut form = form("Ada", "ada@example.com");

    // Act
    form.submit(&client).await.unwrap();

    // Assert
    assert_eq!(form.message(), Some(NETWORK_ERROR_MESSAGE));
    assert!(!form.is_submitting());
    assert_eq!(form.email(), "ada@example.com");
    assert!(test_app.stored_entries().await.is_empty());
}
