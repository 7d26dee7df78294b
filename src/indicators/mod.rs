// Technical indicators module
// Implements the RSI window and red-candle scan used by the trade trigger

pub mod candles;
pub mod rsi;

pub use candles::last_red_close;
pub use rsi::calculate_rsi;
