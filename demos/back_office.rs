//! Back-office example: contact directory, payroll run, and order pricing

use banking_core::{
    process_payroll, CommissionEmployee, ContactDirectory, HourlyEmployee, Payable, PriceList,
    SalariedEmployee,
};
use bigdecimal::BigDecimal;
use std::str::FromStr;

fn dec(s: &str) -> BigDecimal {
    BigDecimal::from_str(s).expect("literal amount")
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // 1. Contact directory
    println!("--- Contact Directory ---");
    let mut directory = ContactDirectory::new();
    directory.add(
        "Max".to_string(),
        "max@gmail.com".to_string(),
        "111-2222".to_string(),
    )?;
    directory.add(
        "Carol".to_string(),
        "carol@gmail.com".to_string(),
        "222-3333".to_string(),
    )?;
    directory.add(
        "Alice".to_string(),
        "alice@gmail.com".to_string(),
        "222-4444".to_string(),
    )?;

    for (position, contact) in directory.list().iter().enumerate() {
        println!(
            "{}. | ID: {} | Name: {}",
            position + 1,
            contact.id,
            contact.name
        );
    }
    match directory.find("Bob") {
        Some(contact) => println!("Bob is found: {}", contact.email),
        None => println!("Bob not found"),
    }

    // 2. Payroll run
    println!("\n--- Processing Payroll ---");
    let employees: Vec<Box<dyn Payable>> = vec![
        Box::new(SalariedEmployee {
            name: "Alice Wonderland".to_string(),
            annual_salary: dec("72000.00"),
        }),
        Box::new(HourlyEmployee {
            name: "Bob The Builder".to_string(),
            hourly_rate: dec("25.00"),
            hours_worked: dec("160.0"),
        }),
        Box::new(CommissionEmployee {
            name: "Charlie Chaplin".to_string(),
            base_salary: dec("2000.00"),
            commission_rate: dec("0.10"),
            sales_amount: dec("15000.00"),
        }),
    ];

    let run = process_payroll(&employees);
    for line in &run.lines {
        println!(" - {} | Monthly Pay: {}", line.summary, line.pay);
    }
    println!("Total Monthly Payroll: {}", run.total);

    // 3. Order pricing
    println!("\n--- Sales Order Processor ---");
    let prices = PriceList::with_standard_catalog();
    let order = prices.order_subtotal(&["TSHIRT", "MUG_SALE", "HAT", "BOOK", "PANTS"]);

    for quote in &order.quotes {
        if quote.on_sale {
            println!(
                " - Item {} (Sale! Original: {}, Sale Price: {})",
                quote.item_code, quote.base_price, quote.price
            );
        } else {
            println!(" - Item {}: {}", quote.item_code, quote.price);
        }
    }
    for unknown in &order.missing {
        println!(" - Item {} (Product Not Found)", unknown);
    }
    println!("Subtotal: {}", order.subtotal);

    Ok(())
}
