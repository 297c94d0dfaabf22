mod idol;
mod nomination;
mod settings;
mod winner;
