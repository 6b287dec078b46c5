//! Hand-written `ContentType` implementations for structs.
//!
//! Run with: `cargo run --example typed_structs`

use tagform::{ContentType, Error, ObjectValue, Result, TypeInfo, Value};

#[derive(Debug, PartialEq)]
struct Camera {
    name: String,
    fov: f32,
    target: Vector3,
}

#[derive(Debug, PartialEq)]
struct Vector3 {
    x: f32,
    y: f32,
    z: f32,
}

impl ContentType for Vector3 {
    fn type_info() -> TypeInfo {
        TypeInfo::object("VECTOR3")
    }

    fn to_value(&self) -> Value {
        ObjectValue::new("VECTOR3")
            .with("X", self.x)
            .with("Y", self.y)
            .with("Z", self.z)
            .into()
    }

    fn from_value(value: Value) -> Result<Self> {
        let object = value
            .as_object()
            .ok_or_else(|| Error::conversion(value.type_info().render(), "VECTOR3"))?;
        Ok(Vector3 {
            x: object.field("X")?,
            y: object.field("Y")?,
            z: object.field("Z")?,
        })
    }
}

impl ContentType for Camera {
    fn type_info() -> TypeInfo {
        TypeInfo::object("CAMERA")
    }

    fn to_value(&self) -> Value {
        ObjectValue::new("CAMERA")
            .with("Name", self.name.to_value())
            .with("Fov", self.fov)
            .with("Target", self.target.to_value())
            .into()
    }

    fn from_value(value: Value) -> Result<Self> {
        let object = value
            .as_object()
            .ok_or_else(|| Error::conversion(value.type_info().render(), "CAMERA"))?;
        Ok(Camera {
            name: object.field("Name")?,
            fov: object.field("Fov")?,
            target: object.field("Target")?,
        })
    }
}

fn main() -> tagform::Result<()> {
    let camera = Camera {
        name: "main".to_string(),
        fov: 72.5,
        target: Vector3 {
            x: 0.0,
            y: 1.0,
            z: -4.0,
        },
    };

    let text = tagform::to_string("camera", &camera)?;
    println!("{text}");

    let back: Camera = tagform::from_str(&text)?;
    assert_eq!(back, camera);
    println!("round trip ok: {back:?}");
    Ok(())
}
