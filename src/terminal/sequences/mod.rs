//! Escape sequence handlers, split per command family

mod csi;
mod dcs;
mod esc;
mod osc;
