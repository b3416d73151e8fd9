//! Medicine information lookups backed by a generative-text provider, in a strictly linted crate.

// Interdiction stricte de pratiques dangereuses ou non idiomatiques
#![deny(warnings)] // Tous les warnings sont traités comme des erreurs
#![deny(unsafe_code)] // Le code unsafe est interdit
#![deny(missing_docs)] // Toute fonction, struct, enum ou module public doit être documenté
#![deny(dead_code)] // Le code inutilisé est interdit
#![deny(unused_imports)]
#![deny(unused_variables)]
#![deny(unused_must_use)] // Oblige à gérer explicitement les Result et Option
#![deny(nonstandard_style)]

// Clippy pour stricte discipline
#![deny(clippy::all)]
#![deny(clippy::pedantic)]
#![deny(clippy::nursery)]
#![deny(clippy::unwrap_used)] // Interdit unwrap()
#![deny(clippy::expect_used)] // Interdit expect()
#![deny(clippy::panic)] // Interdit panic!()
#![deny(clippy::print_stdout)] // Interdit println!() en production
#![deny(clippy::todo)]
#![deny(clippy::unimplemented)]
#![deny(clippy::redundant_clone)]
#![deny(clippy::shadow_unrelated)]
#![cfg_attr(
    test,
    allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)
)]

/// Environment-driven configuration.
pub mod config;
/// Generative-text providers (Gemini) behind the `TextProvider` seam.
pub mod llm;
/// Prompt building, response cleanup and the lookup pipeline.
pub mod medicine;
/// HTTP server and routes.
#[allow(clippy::missing_errors_doc, clippy::unused_async)]
pub mod server;
/// Entry helpers to start the server.
pub mod start_medinfo;
