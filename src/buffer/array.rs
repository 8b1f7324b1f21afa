// Safe backend: storage is `[T; N]`, so every slot always holds some `T`.
// Slots in `buf[len..N]` hold stale or fill values and are never exposed.

mod default;
mod insert;
mod new;
mod pop;
mod push;
mod remove;
mod slice;
