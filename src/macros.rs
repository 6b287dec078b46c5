/// Builds a dynamic [`Value`](crate::Value) from a JSON-like literal.
///
/// Braces build anonymous objects, brackets build lists (element type
/// inferred from the items' [`ContentType`](crate::ContentType)
/// implementation), anything else goes through `Value::from`.
///
/// # Examples
///
/// ```rust
/// use tagform::content;
///
/// let player = content!({
///     "name": "Alice",
///     "hp": 100i32,
///     "tags": ["admin".to_string(), "dev".to_string()],
/// });
///
/// let object = player.as_object().unwrap();
/// assert_eq!(object.get("name").and_then(|v| v.as_str()), Some("Alice"));
/// assert_eq!(object.get("tags").and_then(|v| v.as_list()).map(|l| l.len()), Some(2));
/// ```
#[macro_export]
macro_rules! content {
    // Objects
    ({}) => {
        $crate::Value::Object($crate::ObjectValue::anonymous())
    };

    ({ $($key:literal : $value:tt),* $(,)? }) => {{
        let mut object = $crate::ObjectValue::anonymous();
        $(
            object = object.with($key, $crate::content!($value));
        )*
        $crate::Value::Object(object)
    }};

    // Lists: the element type comes from the items' ContentType impl.
    ([ $($elem:expr),+ $(,)? ]) => {
        $crate::Value::from(vec![$($elem),+])
    };

    // Everything else through From.
    ($other:expr) => {
        $crate::Value::from($other)
    };
}

#[cfg(test)]
mod tests {
    use crate::Value;

    #[test]
    fn test_content_macro_scalars() {
        assert_eq!(content!(true), Value::Bool(true));
        assert_eq!(content!(42i32), Value::I32(42));
        assert_eq!(content!(2.5f64), Value::F64(2.5));
        assert_eq!(content!("hello"), Value::String("hello".to_string()));
    }

    #[test]
    fn test_content_macro_lists() {
        let list = content!([1i32, 2i32, 3i32]);
        let list = list.as_list().unwrap();
        assert_eq!(list.len(), 3);
        assert_eq!(list.element().render(), "INT32");
    }

    #[test]
    fn test_content_macro_objects() {
        let value = content!({
            "name": "Alice",
            "age": 30i32,
        });
        let object = value.as_object().unwrap();
        assert_eq!(object.get("name"), Some(&Value::from("Alice")));
        assert_eq!(object.get("age"), Some(&Value::I32(30)));
    }

    #[test]
    fn test_content_macro_nested() {
        let value = content!({
            "inner": { "flag": false },
        });
        let inner = value.as_object().unwrap().get("inner").unwrap();
        assert_eq!(
            inner.as_object().unwrap().get("flag"),
            Some(&Value::Bool(false))
        );
    }
}
