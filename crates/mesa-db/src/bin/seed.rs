//! Seed an empty database with the café fixture set.
//!
//! ```text
//! cargo run -p mesa-db --bin seed [-- --db <path>]
//! ```
//!
//! Writes 6 categories, 19 products (each with stock on hand), 4 customers,
//! 4 staff members with Monday-Friday shifts, and a week of ledger history.
//! Refuses to touch a database that already has categories.

use std::collections::HashMap;

use chrono::{Duration, Utc};
use rand::Rng;
use uuid::Uuid;

use mesa_core::types::{
    NewCategory, NewCustomer, NewProduct, NewSchedule, NewStaff, Transaction, TransactionKind,
};
use mesa_core::Money;
use mesa_db::{Database, DbConfig};

/// (name, icon, description)
const CATEGORIES: [(&str, &str, &str); 6] = [
    ("Bebidas Calientes", "☕", "Cafés y bebidas para el frío"),
    ("Bebidas Frías", "🧋", "Jugos, sodas y café helado"),
    ("Postres", "🍰", "Dulces para acompañar el café"),
    ("Panadería", "🥐", "Horneados del día"),
    ("Desayunos", "🍳", "Platos de la mañana"),
    ("Snacks", "🥪", "Para comer al paso"),
];

/// (name, price in pesos, category name)
const PRODUCTS: [(&str, i64, &str); 19] = [
    ("Tinto", 2000, "Bebidas Calientes"),
    ("Café con Leche", 3500, "Bebidas Calientes"),
    ("Cappuccino", 4500, "Bebidas Calientes"),
    ("Latte", 5000, "Bebidas Calientes"),
    ("Mocha", 5500, "Bebidas Calientes"),
    ("Chocolate Caliente", 4000, "Bebidas Calientes"),
    ("Jugo Natural", 6000, "Bebidas Frías"),
    ("Limonada de Coco", 7000, "Bebidas Frías"),
    ("Café Helado", 5500, "Bebidas Frías"),
    ("Gaseosa", 3000, "Bebidas Frías"),
    ("Torta de Chocolate", 6500, "Postres"),
    ("Cheesecake", 7000, "Postres"),
    ("Brownie", 4500, "Postres"),
    ("Croissant", 2800, "Panadería"),
    ("Pan de Bono", 2500, "Panadería"),
    ("Almojábana", 2200, "Panadería"),
    ("Huevos Pericos", 8000, "Desayunos"),
    ("Calentado", 9500, "Desayunos"),
    ("Sandwich de Jamón y Queso", 8500, "Snacks"),
];

/// (name, email, phone, document type, document number)
const CUSTOMERS: [(&str, &str, &str, &str, &str); 4] = [
    ("Ana María López", "ana.lopez@gmail.com", "3001234567", "CC", "1023456789"),
    ("Carlos Pérez", "carlos.perez@hotmail.com", "3109876543", "CC", "79845612"),
    ("Laura Gómez", "laura.gomez@gmail.com", "3157891234", "CC", "1098765432"),
    ("Andrés Ramírez", "andres.ramirez@yahoo.com", "3204567890", "CE", "456789123"),
];

/// (name, position, email, phone)
const STAFF: [(&str, &str, &str, &str); 4] = [
    ("María Rodríguez", "Barista", "maria@mesapos.co", "3011112233"),
    ("Juan Martínez", "Cajero", "juan@mesapos.co", "3022223344"),
    ("Camila Torres", "Cocinera", "camila@mesapos.co", "3033334455"),
    ("Pedro Sánchez", "Mesero", "pedro@mesapos.co", "3044445566"),
];

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let path = database_path();
    println!("🌱 Seeding {path}");

    let db = Database::new(DbConfig::new(&path)).await?;

    if !db.categories().list().await?.is_empty() {
        println!("Database already has categories, nothing to do.");
        return Ok(());
    }

    let mut rng = rand::thread_rng();

    let mut category_ids: HashMap<&str, String> = HashMap::new();
    for (name, icon, description) in CATEGORIES {
        let category = db
            .categories()
            .create(&NewCategory {
                name: name.to_string(),
                description: Some(description.to_string()),
                icon: Some(icon.to_string()),
            })
            .await?;
        category_ids.insert(name, category.id);
    }
    println!("  {} categories", CATEGORIES.len());

    for (name, pesos, category) in PRODUCTS {
        let product = db
            .products()
            .create(&NewProduct {
                name: name.to_string(),
                description: None,
                price: Money::from_pesos(pesos),
                category_id: category_ids.get(category).cloned(),
                image_url: None,
                available: None,
            })
            .await?;

        // Put stock on the shelf; fresh products start at zero.
        let stock = db
            .inventory()
            .get_by_product(&product.id)
            .await?
            .ok_or("product created without an inventory row")?;
        db.inventory()
            .set_quantity(&stock.id, rng.gen_range(20..70))
            .await?;
    }
    println!("  {} products, all stocked", PRODUCTS.len());

    for (name, email, phone, document_type, document_number) in CUSTOMERS {
        db.customers()
            .create(&NewCustomer {
                name: name.to_string(),
                email: Some(email.to_string()),
                phone: Some(phone.to_string()),
                document_type: Some(document_type.to_string()),
                document_number: Some(document_number.to_string()),
            })
            .await?;
    }
    println!("  {} customers", CUSTOMERS.len());

    let mut shifts = 0;
    for (name, position, email, phone) in STAFF {
        let member = db
            .staff()
            .create(&NewStaff {
                name: name.to_string(),
                email: Some(email.to_string()),
                phone: Some(phone.to_string()),
                position: position.to_string(),
                active: None,
            })
            .await?;

        // Monday through Friday, opening shift.
        for day_of_week in 1..=5 {
            db.schedules()
                .create(&NewSchedule {
                    staff_id: member.id.clone(),
                    day_of_week,
                    start_time: "08:00".to_string(),
                    end_time: "16:00".to_string(),
                    active: None,
                })
                .await?;
            shifts += 1;
        }
    }
    println!("  {} staff with {shifts} shifts", STAFF.len());

    // A week of ledger history so the dashboard charts have something to show.
    let now = Utc::now();
    for days_back in 0..7 {
        let date = now - Duration::days(days_back);

        db.transactions()
            .insert(&Transaction {
                id: Uuid::new_v4().to_string(),
                kind: TransactionKind::Ingreso,
                category: "Ventas".to_string(),
                amount: Money::from_pesos(rng.gen_range(300_000..800_000)),
                description: Some("Ventas del día".to_string()),
                order_id: None,
                date,
            })
            .await?;
        db.transactions()
            .insert(&Transaction {
                id: Uuid::new_v4().to_string(),
                kind: TransactionKind::Egreso,
                category: "Operaciones".to_string(),
                amount: Money::from_pesos(rng.gen_range(100_000..300_000)),
                description: Some("Gastos operativos".to_string()),
                order_id: None,
                date,
            })
            .await?;
    }
    println!("  14 ledger entries across 7 days");

    db.close().await;
    println!("✅ Done");
    Ok(())
}

/// `--db <path>` beats `MESA_DB_PATH`, which beats `./mesa.db`.
fn database_path() -> String {
    let mut args = std::env::args().skip(1);
    while let Some(arg) = args.next() {
        if arg == "--db" {
            if let Some(path) = args.next() {
                return path;
            }
        }
    }
    std::env::var("MESA_DB_PATH").unwrap_or_else(|_| "./mesa.db".to_string())
}
