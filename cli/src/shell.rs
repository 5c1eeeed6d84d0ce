//! Menu loop: reads choices, calls the lookup core, prints results.
//!
//! The shell is generic over its input, output and transport so tests can
//! drive a whole session from a string without a terminal or a network.

use std::io::{self, BufRead, Write};

use cep_core::{validate_postal_code, validate_state_code, AddressLookup, LookupError, Transport};
use tracing::{debug, info};

use crate::render;

const INVALID_CEP: &str = "❌ CEP inválido. Digite apenas 8 números.";
const INVALID_UF: &str = "❌ UF inválida. Digite um estado válido (exemplo: SP, RJ, MG).";
const CEP_NOT_FOUND: &str = "❌ CEP não encontrado.";
const NO_ADDRESS_FOUND: &str = "❌ Nenhum endereço encontrado.";
const CONNECTION_ERROR: &str = "❌ Erro de conexão. Por favor, verifique sua internet.";
const INVALID_OPTION: &str = "❌ Opção inválida.";

/// A menu selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    ByPostalCode,
    ByAddress,
    Exit,
}

impl Command {
    pub fn parse(input: &str) -> Option<Self> {
        match input.trim() {
            "1" => Some(Command::ByPostalCode),
            "2" => Some(Command::ByAddress),
            "3" => Some(Command::Exit),
            _ => None,
        }
    }
}

pub struct Shell<R, W, T> {
    input: R,
    output: W,
    lookup: AddressLookup<T>,
}

impl<R: BufRead, W: Write, T: Transport> Shell<R, W, T> {
    pub fn new(input: R, output: W, lookup: AddressLookup<T>) -> Self {
        Self {
            input,
            output,
            lookup,
        }
    }

    /// Run until the user picks exit or input ends.
    pub fn run(&mut self) -> io::Result<()> {
        loop {
            self.write_menu()?;
            let Some(choice) = self.prompt("\n(Digite sua resposta númerica): ")? else {
                debug!("input closed, leaving menu");
                return Ok(());
            };
            match Command::parse(&choice) {
                Some(Command::ByPostalCode) => self.by_postal_code()?,
                Some(Command::ByAddress) => self.by_address()?,
                Some(Command::Exit) => {
                    let banner = format!(" {} PROGRAMA ENCERRADO {} ", "=-".repeat(5), "=-".repeat(5));
                    writeln!(self.output, "{banner:^50}")?;
                    return Ok(());
                }
                None => writeln!(self.output, "{INVALID_OPTION}")?,
            }
        }
    }

    fn write_menu(&mut self) -> io::Result<()> {
        let title = format!("\n {} 🔍 Buscador de CEP e Endereço {} ", "-".repeat(10), "-".repeat(10));
        writeln!(self.output, "{title:^50}")?;
        write!(
            self.output,
            "\nDeseja buscar por:\n    [1] - CEP\n    [2] - Endereço\n    [3] - Sair\n"
        )
    }

    fn by_postal_code(&mut self) -> io::Result<()> {
        let raw = self.prompt("Digite seu CEP: ")?.unwrap_or_default();
        let code = match validate_postal_code(&raw) {
            Ok(code) => code,
            Err(e) => {
                info!(input = %raw.trim(), error = %e, "rejected postal code");
                return writeln!(self.output, "{INVALID_CEP}");
            }
        };

        match self.lookup.lookup_by_postal_code(&code) {
            Ok(address) => render::write_address(&mut self.output, &address),
            Err(LookupError::NotFound) => writeln!(self.output, "{CEP_NOT_FOUND}"),
            Err(LookupError::Connection(e)) => {
                info!(error = %e, kind = ?e.kind(), "postal code lookup failed");
                writeln!(self.output, "{CONNECTION_ERROR}")
            }
        }
    }

    fn by_address(&mut self) -> io::Result<()> {
        let uf = self.prompt("(exemplo: SP, RJ)\nUF: ")?.unwrap_or_default();
        let city = self.prompt("Cidade: ")?.unwrap_or_default();
        let street = self.prompt("Endereço (logradouro): ")?.unwrap_or_default();

        let state = match validate_state_code(&uf) {
            Ok(state) => state,
            Err(e) => {
                info!(error = %e, "rejected state code");
                return writeln!(self.output, "{INVALID_UF}");
            }
        };

        match self.lookup.lookup_by_address(&state, &city, &street) {
            Ok(addresses) => render::write_table(&mut self.output, &addresses),
            Err(LookupError::NotFound) => writeln!(self.output, "{NO_ADDRESS_FOUND}"),
            Err(LookupError::Connection(e)) => {
                info!(error = %e, kind = ?e.kind(), "address search failed");
                writeln!(self.output, "{CONNECTION_ERROR}")
            }
        }
    }

    /// Print `label`, then read one line. `None` once input is exhausted.
    fn prompt(&mut self, label: &str) -> io::Result<Option<String>> {
        write!(self.output, "{label}")?;
        self.output.flush()?;
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim().to_string()))
    }
}
