pub mod alpaca;
pub mod yahoo;

pub use alpaca::{Account, AlpacaClient, Order, OrderSide};
pub use yahoo::YahooFinanceClient;
