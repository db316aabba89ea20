use initiative_registry::records::{ROLE_ORGANIZER, ROLE_VOLUNTEER};
use initiative_registry::{RecordStore, User};
use serde_json::json;

#[tokio::main]
async fn main() -> Result<(), initiative_registry::Error> {
    let path = std::env::temp_dir().join("initiative_registry_example_users.json");
    let _ = std::fs::remove_file(&path);
    let users = RecordStore::<User>::open(&path)?;

    // register two volunteers
    for (name, email) in [("Ann", "ann@example.com"), ("Bob", "bob@example.com")] {
        let user = User {
            name: Some(json!(name)),
            email: Some(json!(email)),
            password: Some(json!("changeme")),
            birthday: Some(json!("1990-01-01")),
            role: Some(json!(ROLE_VOLUNTEER)),
            ..User::default()
        };
        if user.is_complete() {
            users.append(user).await?;
        }
    }

    // promotion is a manual edit, not an endpoint
    users
        .modify(|all| {
            if let Some(bob) = all
                .iter_mut()
                .find(|u| u.email() == Some("bob@example.com"))
            {
                bob.role = Some(json!(ROLE_ORGANIZER));
            }
            Ok::<_, initiative_registry::Error>(())
        })
        .await?;

    for user in users.load().await? {
        println!(
            "{:<20} {}",
            user.email().unwrap_or("-"),
            user.role().unwrap_or("-")
        );
    }
    println!("organizers: {}", users.filter(User::is_organizer).await?.len());
    println!("\n{}", std::fs::read_to_string(&path).unwrap_or_default());

    let _ = std::fs::remove_file(&path);
    Ok(())
}
