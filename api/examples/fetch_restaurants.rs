use std::{env, time::Duration};

use eatclub_api::{EatClubClient, DEFAULT_BASE_URL};

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();

    let base_url = env::var("EATCLUB_API_URL").unwrap_or_else(|_| DEFAULT_BASE_URL.to_string());

    let client = match EatClubClient::new(base_url, Duration::from_secs(15)) {
        Ok(client) => client,
        Err(e) => {
            eprintln!("Error building client: {}", e);
            return;
        }
    };

    // `cargo run --example fetch_restaurants -- <id>` shows a single restaurant
    if let Some(id) = env::args().nth(1) {
        match client.get_restaurant_by_id(&id).await {
            Ok(Some(restaurant)) => {
                println!("{} ({})", restaurant.name, restaurant.cuisine_line(", "));
                println!("{}  {}", restaurant.address_line(), restaurant.hours_label());
                for deal in &restaurant.deals {
                    println!(
                        "  {}% off, {} left, {}",
                        deal.discount,
                        deal.qty_left,
                        deal.time_window_label()
                    );
                }
            }
            Ok(None) => eprintln!("No restaurant with ID {}", id),
            Err(e) => eprintln!("Error fetching restaurant: {}", e),
        }
        return;
    }

    println!("Fetching restaurants from {}...\n", client.restaurants_url());

    match client.get_restaurants().await {
        Ok(restaurants) => {
            println!("Found {} restaurants:", restaurants.len());
            for (i, restaurant) in restaurants.iter().enumerate() {
                println!(
                    "{}. {} - best deal {}% ({} deals) @ {} (ID: {})",
                    i + 1,
                    restaurant.name,
                    restaurant.best_deal_discount(),
                    restaurant.deals.len(),
                    restaurant.address_line(),
                    restaurant.id
                );
            }
        }
        Err(e) => {
            eprintln!("Error fetching restaurants: {}", e);
        }
    }
}
