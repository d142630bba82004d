pub mod city;
pub mod filter;
pub mod table;
pub mod trip;
