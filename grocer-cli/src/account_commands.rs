use anyhow::Result;
use colored::Colorize;
use grocer_client::{refresh_badges, Api, AuthStore};
use grocer_types::{Credentials, Registration};

pub async fn login(auth: &AuthStore, email: &str, password: &str) -> Result<()> {
    auth.login(&Credentials::new(email.trim(), password)).await?;
    println!("{} Logged in as {}", "✓".green(), email.trim().green());
    Ok(())
}

pub async fn register(
    auth: &AuthStore,
    full_name: String,
    email: String,
    password: String,
    staff_code: Option<String>,
) -> Result<()> {
    let registration = Registration {
        full_name: full_name.trim().to_string(),
        email: email.trim().to_string(),
        password,
        staff_code: staff_code.unwrap_or_default(),
        ..Default::default()
    };
    match auth.register(&registration).await? {
        Some(_) => println!("{} Account created, you are logged in", "✓".green()),
        None => println!(
            "{} Account created. Run {} to sign in.",
            "✓".green(),
            format!("grocer login -e {}", registration.email).cyan()
        ),
    }
    Ok(())
}

pub fn logout(auth: &AuthStore) {
    auth.logout();
    println!("{} Logged out", "✓".green());
}

pub async fn whoami(api: &Api) -> Result<()> {
    if !api.session().is_authenticated() {
        println!("{}", "Not logged in.".yellow());
        return Ok(());
    }
    let profile = api.profile().await?;
    let badges = refresh_badges(api).await;

    println!("{}  {}", "Name:".bold(), if profile.full_name.is_empty() { "-" } else { profile.full_name.as_str() });
    println!("{}  {}", "Email:".bold(), profile.email);
    println!("{}  {}", "Role:".bold(), if profile.is_staff() { profile.role.magenta() } else { profile.role.normal() });
    println!("{}  {}", "Orders:".bold(), profile.orders_count);
    println!("{}  {}", "Cart:".bold(), badges.cart_items);
    println!("{}  {}", "Wishlist:".bold(), badges.wishlist_items);
    Ok(())
}
