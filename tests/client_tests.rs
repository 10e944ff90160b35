//! DevelopersClient tests against mocked responses and a live server

use devroster::config::StorageBackend;
use devroster::domain::{DeveloperId, DeveloperPatch, NewDeveloper, Skills};
use devroster::infrastructure::{ClientError, DevelopersClient};
use devroster::{Config, create_app};
use mockito::Server;
use serde_json::json;
use tokio::net::TcpListener;

fn developer_json(id: &str, name: &str) -> serde_json::Value {
    json!({
        "id": id,
        "name": name,
        "position": "Engineer",
        "location": "London",
        "experienceYears": 12,
        "imageUrl": "https://example.com/ada.png",
        "skills": {
            "communicative": 80, "efficient": 60, "immaculate": 70,
            "problemsolver": 95, "timely": 65, "tinker": 75
        }
    })
}

fn new_developer(name: &str) -> NewDeveloper {
    NewDeveloper {
        name: name.to_string(),
        position: "Engineer".to_string(),
        location: "London".to_string(),
        experience_years: 12,
        image_url: String::new(),
        skills: Skills {
            communicative: 80,
            efficient: 60,
            immaculate: 70,
            problemsolver: 95,
            timely: 65,
            tinker: 75,
        },
    }
}

/// Serve a fresh in-memory app on an ephemeral port and return its base URL
async fn spawn_app() -> String {
    let mut config = Config::default();
    config.storage.backend = StorageBackend::Memory;
    let app = create_app(&config).await.expect("Failed to create app");

    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    format!("http://{}", addr)
}

#[tokio::test]
async fn test_get_developers_decodes_list() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("GET", "/api/devs")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(json!([developer_json("1", "Ada")]).to_string())
        .create_async()
        .await;

    let client = DevelopersClient::new(server.url()).unwrap();
    let developers = client.get_developers().await.expect("developers");

    assert_eq!(developers.len(), 1);
    assert_eq!(developers[0].name, "Ada");
    mock.assert_async().await;
}

#[tokio::test]
async fn test_server_error_folds_to_none() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("GET", "/api/devs")
        .with_status(500)
        .with_body("boom")
        .expect(2)
        .create_async()
        .await;

    let client = DevelopersClient::new(server.url()).unwrap();
    assert!(client.get_developers().await.is_none());

    match client.try_get_developers().await {
        Err(ClientError::Http { status, .. }) => assert_eq!(status, 500),
        other => panic!("expected HTTP error, got {:?}", other.map(|d| d.len())),
    }
    mock.assert_async().await;
}

#[tokio::test]
async fn test_null_developer_is_none() {
    let mut server = Server::new_async().await;
    let _mock = server
        .mock("GET", "/api/devs/missing")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body("null")
        .create_async()
        .await;

    let client = DevelopersClient::new(server.url()).unwrap();
    let id = DeveloperId::new("missing").unwrap();

    assert!(client.try_get_developer(&id).await.unwrap().is_none());
    assert!(client.get_developer(&id).await.is_none());
}

#[tokio::test]
async fn test_malformed_body_is_decode_error() {
    let mut server = Server::new_async().await;
    let _mock = server
        .mock("GET", "/api/devs")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body("{\"not\": \"a list\"}")
        .create_async()
        .await;

    let client = DevelopersClient::new(server.url()).unwrap();
    assert!(matches!(
        client.try_get_developers().await,
        Err(ClientError::Decode(_))
    ));
}

#[tokio::test]
async fn test_rejected_add_is_none() {
    let mut server = Server::new_async().await;
    let _mock = server
        .mock("POST", "/api/devs")
        .with_status(400)
        .with_body(json!({"error": {"message": "bad", "type": "domain_error", "status": 400}}).to_string())
        .create_async()
        .await;

    let client = DevelopersClient::new(server.url()).unwrap();
    assert!(client.add_developer(&new_developer("Ada")).await.is_none());
}

#[tokio::test]
async fn test_unreachable_server_is_none() {
    // Nothing listens on the discard port
    let client = DevelopersClient::new("http://127.0.0.1:9").unwrap();
    assert!(client.get_developers().await.is_none());
}

#[tokio::test]
async fn test_round_trip_against_live_server() {
    let client = DevelopersClient::new(spawn_app().await).unwrap();

    assert_eq!(client.get_developers().await, Some(Vec::new()));

    let created = client
        .add_developer(&new_developer("Ada"))
        .await
        .expect("created");
    assert_eq!(
        created.image_url,
        "https://avatars.githubusercontent.com/u/45007745?v=4"
    );
    assert_eq!(client.get_developer(&created.id).await, Some(created.clone()));

    let patch = DeveloperPatch {
        position: Some("Lead".to_string()),
        ..Default::default()
    };
    let updated = client
        .edit_developer(&created.id, &patch)
        .await
        .expect("updated");
    assert_eq!(updated.position, "Lead");
    assert_eq!(updated.name, "Ada");

    let unknown = DeveloperId::new("nobody").unwrap();
    assert!(client.edit_developer(&unknown, &patch).await.is_none());
}
