//! Plain-text tables for list output.

use domain_products::Product;
use domain_users::User;
use std::fmt::Write;

pub fn products_table(products: &[Product]) -> String {
    let rows: Vec<[String; 5]> = products
        .iter()
        .map(|p| {
            [
                p.id.clone(),
                p.name.clone(),
                p.category.clone(),
                format!("{:.2}", p.price),
                p.stock.to_string(),
            ]
        })
        .collect();
    table(["ID", "NAME", "CATEGORY", "PRICE", "STOCK"], &rows)
}

pub fn users_table(users: &[User]) -> String {
    let rows: Vec<[String; 4]> = users
        .iter()
        .map(|u| {
            [
                u.id.clone(),
                u.username.clone(),
                u.email.clone(),
                u.role.to_string(),
            ]
        })
        .collect();
    table(["ID", "USERNAME", "EMAIL", "ROLE"], &rows)
}

fn table<const N: usize>(headers: [&str; N], rows: &[[String; N]]) -> String {
    let mut widths = headers.map(|h| h.chars().count());
    for row in rows {
        for (width, cell) in widths.iter_mut().zip(row) {
            *width = (*width).max(cell.chars().count());
        }
    }

    let mut out = String::new();
    write_row(&mut out, headers.iter().copied(), &widths);
    for row in rows {
        write_row(&mut out, row.iter().map(String::as_str), &widths);
    }
    out
}

fn write_row<'a>(out: &mut String, cells: impl Iterator<Item = &'a str>, widths: &[usize]) {
    let padded: Vec<String> = cells
        .zip(widths)
        .map(|(cell, &width)| format!("{cell:<width$}"))
        .collect();
    let _ = writeln!(out, "{}", padded.join("  ").trim_end());
}
