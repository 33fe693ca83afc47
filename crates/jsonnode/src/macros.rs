/// Build a [`Node`](crate::Node) from JSON-like syntax.
///
/// Object keys must be string literals. Values are `null`, nested arrays or objects, or a
/// single token converted with `Node::from`; wrap anything longer in parentheses, e.g.
/// negative numbers or existing nodes.
///
/// ```
/// use jsonnode::jsonnode;
///
/// let node = jsonnode!({"a": 1, "b": [true, null], "c": (-1)});
/// assert_eq!(node.to_string(), r#"{"a":1,"b":[true,null],"c":-1}"#);
/// ```
#[macro_export]
macro_rules! jsonnode {
    (null) => {
        $crate::Node::Null
    };
    ([ $($element:tt),* $(,)? ]) => {
        $crate::Node::Array(
            <$crate::Array as ::core::iter::FromIterator<$crate::Node>>::from_iter([
                $( $crate::jsonnode!($element) ),*
            ])
        )
    };
    ({ $($key:literal : $value:tt),* $(,)? }) => {
        $crate::Node::Object(
            <$crate::Object as ::core::iter::FromIterator<(&str, $crate::Node)>>::from_iter([
                $( ($key, $crate::jsonnode!($value)) ),*
            ])
        )
    };
    ($other:expr) => {
        $crate::Node::from($other)
    };
}
