mod make_ring;

pub use make_ring::MakeRing;
