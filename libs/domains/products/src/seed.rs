//! Demo catalogue loaded at startup unless seeding is disabled.

use chrono::{DateTime, TimeZone, Utc};

use crate::models::Product;

fn at_hour(hour: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 8, 29, hour, 0, 0)
        .single()
        .unwrap_or_default()
}

fn product(
    id: &str,
    name: &str,
    description: &str,
    price: f64,
    category: &str,
    stock: i64,
    hour: u32,
) -> Product {
    Product {
        id: id.to_string(),
        name: name.to_string(),
        description: description.to_string(),
        price,
        category: category.to_string(),
        stock,
        created_at: at_hour(hour),
    }
}

/// The eight demo products, in store order.
pub fn demo_products() -> Vec<Product> {
    vec![
        product(
            "1",
            "MacBook Pro 16\"",
            "High-performance laptop with M2 Pro chip, perfect for professional work and creative tasks",
            2499.99,
            "Electronics",
            25,
            10,
        ),
        product(
            "2",
            "iPhone 15 Pro",
            "Latest smartphone with titanium design, A17 Pro chip, and advanced camera system",
            999.99,
            "Electronics",
            150,
            11,
        ),
        product(
            "3",
            "Breville Coffee Maker",
            "Automatic espresso machine with built-in grinder for cafe-quality coffee at home",
            599.99,
            "Home & Kitchen",
            30,
            12,
        ),
        product(
            "4",
            "Nike Air Max 270",
            "Comfortable running shoes with Air Max technology for maximum cushioning",
            129.99,
            "Sports",
            75,
            13,
        ),
        product(
            "5",
            "Kindle Paperwhite",
            "Waterproof e-reader with 6.8\" display and weeks of battery life",
            139.99,
            "Books",
            45,
            14,
        ),
        product(
            "6",
            "Instant Pot Duo",
            "7-in-1 electric pressure cooker for fast and healthy cooking",
            89.99,
            "Home & Kitchen",
            60,
            15,
        ),
        product(
            "7",
            "Sony WH-1000XM5",
            "Industry-leading noise-canceling headphones with exceptional sound quality",
            399.99,
            "Electronics",
            40,
            16,
        ),
        product(
            "8",
            "Yoga Mat Premium",
            "Non-slip yoga mat made from eco-friendly materials, perfect for home workouts",
            49.99,
            "Sports",
            100,
            17,
        ),
    ]
}
