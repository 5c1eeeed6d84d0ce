//! In-memory stand-in for the ViaCEP web service.
//!
//! Serves the two read endpoints under `/ws` from a fixed set of records so
//! the client can be exercised end-to-end without the real service.

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use serde::{Deserialize, Serialize};
use serde_json::json;
use tokio::net::TcpListener;
use unicode_normalization::char::is_combining_mark;
use unicode_normalization::UnicodeNormalization;

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct Address {
    pub cep: String,
    pub logradouro: String,
    pub complemento: String,
    pub bairro: String,
    pub localidade: String,
    pub uf: String,
}

impl Address {
    fn new(cep: &str, logradouro: &str, bairro: &str, localidade: &str, uf: &str) -> Self {
        Self {
            cep: cep.to_string(),
            logradouro: logradouro.to_string(),
            complemento: String::new(),
            bairro: bairro.to_string(),
            localidade: localidade.to_string(),
            uf: uf.to_string(),
        }
    }

    fn digits(&self) -> String {
        self.cep.chars().filter(char::is_ascii_digit).collect()
    }
}

pub type Db = Arc<Vec<Address>>;

/// Records served by `app()`.
pub fn fixtures() -> Vec<Address> {
    vec![
        Address::new("01310-100", "Avenida Paulista", "Bela Vista", "São Paulo", "SP"),
        Address::new("01310-200", "Avenida Paulista", "Bela Vista", "São Paulo", "SP"),
        Address::new("01311-000", "Avenida Paulista", "Bela Vista", "São Paulo", "SP"),
        Address::new("04094-050", "Avenida Pedro Álvares Cabral", "Ibirapuera", "São Paulo", "SP"),
        Address::new("20040-002", "Avenida Rio Branco", "Centro", "Rio de Janeiro", "RJ"),
        Address::new("70040-010", "Esplanada dos Ministérios", "Zona Cívico-Administrativa", "Brasília", "DF"),
    ]
}

pub fn app() -> Router {
    app_with(fixtures())
}

pub fn app_with(records: Vec<Address>) -> Router {
    let db: Db = Arc::new(records);
    Router::new()
        .route("/ws/{cep}/json/", get(lookup_cep))
        .route("/ws/{uf}/{city}/{street}/json/", get(search_address))
        .with_state(db)
}

pub async fn run(listener: TcpListener) -> Result<(), std::io::Error> {
    axum::serve(listener, app()).await
}

/// Malformed codes get a bare 400, unknown ones a `{"erro": true}` body.
async fn lookup_cep(State(db): State<Db>, Path(cep): Path<String>) -> Response {
    if cep.len() != 8 || !cep.bytes().all(|b| b.is_ascii_digit()) {
        return StatusCode::BAD_REQUEST.into_response();
    }
    match db.iter().find(|a| a.digits() == cep) {
        Some(address) => Json(address.clone()).into_response(),
        None => Json(json!({ "erro": true })).into_response(),
    }
}

/// City must match exactly and street by substring, both ignoring case and
/// accents. Terms shorter than 3 characters are rejected like the real service.
async fn search_address(
    State(db): State<Db>,
    Path((uf, city, street)): Path<(String, String, String)>,
) -> Response {
    if city.chars().count() < 3 || street.chars().count() < 3 {
        return StatusCode::BAD_REQUEST.into_response();
    }
    let city = fold(&city);
    let street = fold(&street);
    let matches: Vec<Address> = db
        .iter()
        .filter(|a| a.uf.eq_ignore_ascii_case(&uf))
        .filter(|a| fold(&a.localidade) == city)
        .filter(|a| fold(&a.logradouro).contains(&street))
        .cloned()
        .collect();
    Json(matches).into_response()
}

fn fold(text: &str) -> String {
    text.nfkd()
        .filter(|c| !is_combining_mark(*c))
        .collect::<String>()
        .to_lowercase()
}
