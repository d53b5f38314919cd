/// Sectoral index snapshots from the [NSE] `allIndices` API.
///
/// [NSE]: https://www.nseindia.com/
pub mod nse;
