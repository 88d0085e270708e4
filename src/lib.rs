//! Backend de gestión de alquiler de vehículos
//!
//! API REST sobre clientes, vehículos y bookings. El núcleo es el engine
//! del ciclo de vida del booking: validación, disponibilidad por rango de
//! fechas, precio fijado en la creación y máquina de estados
//! Active → Completed / Cancelled.

pub mod config;
pub mod controllers;
pub mod database;
pub mod dto;
pub mod middleware;
pub mod models;
pub mod repositories;
pub mod routes;
pub mod services;
pub mod state;
pub mod utils;
