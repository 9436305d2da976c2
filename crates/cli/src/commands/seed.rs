//! Seed the database with a demo catalog.
//!
//! Inserts a handful of categories, franchises, and products so a fresh
//! install has something to browse. Refuses to run against a database
//! that already has catalog data.

use rust_decimal::Decimal;
use sqlx::PgPool;
use tracing::info;

use gamestore_api::config::ApiConfig;
use gamestore_api::db;

/// Demo catalog: (category, franchises with their products).
type SeedProduct = (&'static str, &'static str, &'static str);
type SeedFranchise = (&'static str, &'static [SeedProduct]);
type SeedCategory = (&'static str, &'static [SeedFranchise]);

const CATALOG: &[SeedCategory] = &[
    (
        "RPG",
        &[
            (
                "Final Quest",
                &[
                    ("Final Quest VII", "The beloved classic, remastered.", "59.99"),
                    ("Final Quest XVI", "A new generation of heroes.", "69.99"),
                ],
            ),
            (
                "Eldervale",
                &[("Eldervale: Ashlands", "Open-world roleplaying at its bleakest.", "49.99")],
            ),
        ],
    ),
    (
        "Strategy",
        &[
            (
                "Starhold",
                &[
                    ("Starhold II", "Real-time tactics among the stars.", "39.99"),
                    ("Starhold II: Outer Rim", "Expansion campaign.", "19.99"),
                ],
            ),
        ],
    ),
    (
        "Shooter",
        &[(
            "Ironline",
            &[("Ironline: Resurgence", "Squad-based arena shooter.", "29.99")],
        )],
    ),
];

/// Seed the demo catalog.
///
/// # Errors
///
/// Returns an error if configuration is missing, the database already has
/// catalog data, or an insert fails.
pub async fn run() -> Result<(), Box<dyn std::error::Error>> {
    let config = ApiConfig::from_env()?;

    info!("Connecting to database...");
    let pool = db::create_pool(&config.database_url).await?;

    let existing: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM categories")
        .fetch_one(&pool)
        .await?;
    if existing > 0 {
        return Err(format!("database already has {existing} categories; refusing to seed").into());
    }

    let mut products = 0usize;
    for (category_name, franchises) in CATALOG {
        let category_id = insert_category(&pool, category_name).await?;
        for (franchise_name, franchise_products) in *franchises {
            let franchise_id = insert_franchise(&pool, franchise_name, category_id).await?;
            for (name, description, price) in *franchise_products {
                let price: Decimal = price.parse()?;
                insert_product(&pool, name, description, price, franchise_id).await?;
                products += 1;
            }
        }
    }

    info!(categories = CATALOG.len(), products, "Seeding complete!");
    Ok(())
}

async fn insert_category(pool: &PgPool, name: &str) -> Result<i32, sqlx::Error> {
    sqlx::query_scalar("INSERT INTO categories (name) VALUES ($1) RETURNING id")
        .bind(name)
        .fetch_one(pool)
        .await
}

async fn insert_franchise(
    pool: &PgPool,
    name: &str,
    category_id: i32,
) -> Result<i32, sqlx::Error> {
    sqlx::query_scalar("INSERT INTO franchises (name, category_id) VALUES ($1, $2) RETURNING id")
        .bind(name)
        .bind(category_id)
        .fetch_one(pool)
        .await
}

async fn insert_product(
    pool: &PgPool,
    name: &str,
    description: &str,
    price: Decimal,
    franchise_id: i32,
) -> Result<(), sqlx::Error> {
    sqlx::query(
        "INSERT INTO products (name, description, price, franchise_id) VALUES ($1, $2, $3, $4)",
    )
    .bind(name)
    .bind(description)
    .bind(price)
    .bind(franchise_id)
    .execute(pool)
    .await?;

    Ok(())
}
