// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Test utilities shared across unit and integration tests.
//!
//! This module is always compiled but hidden from documentation.

#![doc(hidden)]

use serde_json::{json, Value};

use crate::options::Options;
use crate::search::SearchEngine;
use crate::types::Match;

/// A small catalogue of Spanish golden-age titles, as plain strings.
pub fn titles() -> Vec<String> {
    [
        "Don Quijote de la Mancha",
        "La Galatea",
        "Novelas ejemplares",
        "Los trabajos de Persiles y Sigismunda",
        "Fuenteovejuna",
        "El caballero de Olmedo",
        "La vida es sueño",
        "El burlador de Sevilla",
    ]
    .into_iter()
    .map(String::from)
    .collect()
}

/// The same catalogue as records with `title`, `author` and `year`.
pub fn books() -> Vec<Value> {
    vec![
        json!({"title": "Don Quijote de la Mancha", "author": "Miguel de Cervantes", "year": 1605}),
        json!({"title": "La Galatea", "author": "Miguel de Cervantes", "year": 1585}),
        json!({"title": "Novelas ejemplares", "author": "Miguel de Cervantes", "year": 1613}),
        json!({"title": "Fuenteovejuna", "author": "Lope de Vega", "year": 1619}),
        json!({"title": "El caballero de Olmedo", "author": "Lope de Vega", "year": 1620}),
        json!({"title": "La vida es sueño", "author": "Pedro Calderón de la Barca", "year": 1635}),
        json!({"title": "El burlador de Sevilla", "author": "Tirso de Molina", "year": 1630}),
    ]
}

/// Engine over [`titles`] with the given options.
pub fn title_engine(options: Options) -> SearchEngine<String> {
    SearchEngine::new(titles(), options).expect("fixture options are valid")
}

/// Engine over [`books`], searching `title` then `author`.
pub fn book_engine(options: Options) -> SearchEngine<Value> {
    let options = Options {
        keys: vec!["title".to_string(), "author".to_string()],
        ..options
    };
    SearchEngine::new(books(), options).expect("fixture options are valid")
}

/// Element indices of `matches`, in result order.
pub fn indices<T>(matches: &[Match<T>]) -> Vec<usize> {
    matches.iter().map(|m| m.index).collect()
}

/// Float comparison with a tolerance suited to percentage scores.
pub fn assert_close(actual: f64, expected: f64) {
    assert!(
        (actual - expected).abs() < 1e-9,
        "expected {expected}, got {actual}"
    );
}
