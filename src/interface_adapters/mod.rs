pub mod clients;
pub mod fragments;
pub mod panel;
