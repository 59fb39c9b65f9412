pub mod health;
pub mod track;
