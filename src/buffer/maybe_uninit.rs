// Invariants for the `unsafe-maybe-uninit` backend:
// - `0 <= len <= N` always holds.
// - Elements in `buf[..len]` are initialized `T` values.
// - Elements in `buf[len..N]` are logically uninitialized and must never be
//   read as `T`.
// - All crate-internal methods maintain these invariants.

mod default;
mod insert;
mod new;
mod pop;
mod push;
mod remove;
mod slice;
