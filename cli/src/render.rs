//! Console rendering of lookup results.

use std::io::{self, Write};

use cep_core::Address;

const COLUMNS: [&str; 5] = ["cep", "logradouro", "bairro", "localidade", "uf"];

/// Labeled dump of a single record.
pub fn write_address(out: &mut impl Write, address: &Address) -> io::Result<()> {
    writeln!(out, "\n🔹 Dados do CEP: ")?;
    writeln!(out, "CEP: {} ", address.postal_code)?;
    writeln!(out, "Estado: {} ", address.state)?;
    writeln!(out, "Cidade: {} ", address.city)?;
    writeln!(out, "Bairro: {} ", address.neighborhood)?;
    writeln!(out, "Logradouro: {} ", address.street)?;
    Ok(())
}

/// Aligned table with a row index, one line per record.
pub fn write_table(out: &mut impl Write, addresses: &[Address]) -> io::Result<()> {
    writeln!(out, "\n 🔹 Endereços encontrados: ")?;

    let rows: Vec<[&str; 5]> = addresses
        .iter()
        .map(|a| {
            [
                a.postal_code.as_str(),
                a.street.as_str(),
                a.neighborhood.as_str(),
                a.city.as_str(),
                a.state.as_str(),
            ]
        })
        .collect();

    let mut widths = COLUMNS.map(|c| c.chars().count());
    for row in &rows {
        for (width, cell) in widths.iter_mut().zip(row) {
            *width = (*width).max(cell.chars().count());
        }
    }
    let index_width = addresses.len().saturating_sub(1).to_string().len();

    write!(out, "{:index_width$}", "")?;
    for (column, width) in COLUMNS.iter().zip(widths) {
        write!(out, "  {column:<width$}")?;
    }
    writeln!(out)?;

    for (i, row) in rows.iter().enumerate() {
        write!(out, "{i:<index_width$}")?;
        for (cell, width) in row.iter().zip(widths) {
            write!(out, "  {cell:<width$}")?;
        }
        writeln!(out)?;
    }
    Ok(())
}
