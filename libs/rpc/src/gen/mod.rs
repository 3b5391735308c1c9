// @generated
// This file wires up buf-generated protobuf code (see buf.gen.yaml)
// The prost files include!() their tonic counterparts

pub mod courses {
    pub mod v1 {
        include!("courses.v1.rs");
        // courses.v1.tonic.rs is included by courses.v1.rs
    }
}
