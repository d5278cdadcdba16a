/// Binary entrypoint for the `hexseq` executable.
///
/// Keeps the binary thin — all logic lives in the `hexseq_lib` crate so unit
/// tests can import library functions directly.
fn main() {
    hexseq_lib::run();
}
