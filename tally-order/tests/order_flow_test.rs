use tally_catalog::{Category, ComponentChoices};
use tally_core::{Config, ErrorKind};
use tally_order::Shop;

fn basic_build() -> ComponentChoices {
    ComponentChoices::new("p3", "16GB", "1TB", "19\"", "Mini Tower", "2")
}

fn high_end_build() -> ComponentChoices {
    ComponentChoices::new("p7", "32GB", "2TB", "23\"", "Midi Tower", "4")
}

fn shop_with_stock(units: u32) -> Shop {
    let mut config = Config::default();
    config.inventory.initial_stock = units;
    Shop::from_config(&config)
}

#[test]
fn test_estimate_receipt_and_order_flow() {
    let mut shop = Shop::default();

    let estimate = shop.calculate_estimate(&high_end_build()).unwrap();
    assert_eq!(estimate.subtotal, 660);
    assert_eq!(estimate.total_with_markup, 792.0);

    let receipt = shop.format_estimate(&estimate);
    assert!(receipt.contains(&format!("Estimate Number: {}", estimate.estimate_number)));
    assert!(receipt.contains("Subtotal: $660"));
    assert!(receipt.contains("Total (with 20% markup): $792"));

    let order = shop.place_order(&estimate, "Ada", "ada@example.com").unwrap();
    assert_eq!(order.total_with_markup, 792.0);
    assert_eq!(shop.ledger().orders(), &[order]);
}

#[test]
fn test_inventory_runs_out_without_partial_decrement() {
    let mut shop = shop_with_stock(2);

    for _ in 0..2 {
        let estimate = shop.calculate_estimate(&basic_build()).unwrap();
        shop.place_order(&estimate, "Ada", "ada@example.com").unwrap();
    }

    for category in Category::ALL {
        assert_eq!(shop.get_stock(category), 0);
    }

    let estimate = shop.calculate_estimate(&basic_build()).unwrap();
    let err = shop.place_order(&estimate, "Grace", "555-0100").unwrap_err();
    assert_eq!(err.kind(), ErrorKind::ResourceExhausted);
    assert_eq!(shop.ledger().len(), 2);

    // Restocking only the processor still leaves the rest exhausted
    shop.restock(Category::Processor, 1);
    assert!(shop.place_order(&estimate, "Grace", "555-0100").is_err());
    assert_eq!(shop.get_stock(Category::Processor), 1);
    assert_eq!(shop.ledger().len(), 2);
}

#[test]
fn test_single_empty_category_protects_others() {
    let mut shop = shop_with_stock(5);
    let estimate = shop.calculate_estimate(&basic_build()).unwrap();

    // Empty every category, then refill all but the case
    for _ in 0..5 {
        shop.place_order(&estimate, "Ada", "ada@example.com").unwrap();
    }
    shop.restock(Category::Processor, 2);
    shop.restock(Category::Ram, 2);
    shop.restock(Category::Storage, 2);
    shop.restock(Category::Screen, 2);
    shop.restock(Category::UsbPorts, 2);

    let err = shop.place_order(&estimate, "Ada", "ada@example.com").unwrap_err();
    assert!(err.to_string().contains("caseType is out of stock"));
    for category in [Category::Processor, Category::Ram, Category::Storage, Category::Screen, Category::UsbPorts] {
        assert_eq!(shop.get_stock(category), 2);
    }
}

#[test]
fn test_estimate_numbers_unique_across_shop() {
    let mut shop = Shop::default();
    let mut last = 0;

    for _ in 0..5 {
        let estimate = shop.calculate_estimate(&basic_build()).unwrap();
        assert!(estimate.estimate_number > last);
        last = estimate.estimate_number;
    }

    let mut bad = basic_build();
    bad.set(Category::UsbPorts, "6");
    let err = shop.calculate_estimate(&bad).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Validation);
    assert!(err.to_string().contains("Invalid component choice"));

    let next = shop.calculate_estimate(&basic_build()).unwrap();
    assert_eq!(next.estimate_number, last + 1);
}
