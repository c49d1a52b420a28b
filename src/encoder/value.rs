//! Value rendering: turning a field's value into zero or more flag values.
//!
//! Non-`Option` values are suppressed when they hold their type's zero value.
//! `Option<T>` plays the role of a pointer: `None` renders nothing and `Some`
//! always renders, zero or not.

use super::tag::Tag;
use log::debug;
use std::collections::{BTreeMap, HashMap};
use std::fmt;
use std::net::{IpAddr, Ipv4Addr, Ipv6Addr, SocketAddr};
use std::path::{Path, PathBuf};
use std::sync::mpsc;
use std::sync::Arc;

/// A single rendered occurrence of a flag
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FlagArg {
    /// `--name`
    Bare,
    /// `--name=value`
    Value(String),
}

impl FlagArg {
    pub fn into_token(self, prefix: &str, name: &str) -> String {
        match self {
            FlagArg::Bare => format!("{}{}", prefix, name),
            FlagArg::Value(value) => format!("{}{}={}", prefix, name, value),
        }
    }
}

/// A type that can appear as the value of a tagged option field.
pub trait FlagValue {
    /// Render without zero suppression.
    fn render_explicit(&self, tag: &Tag<'_>, out: &mut Vec<FlagArg>);

    /// Whether this value is its type's zero value
    fn is_zero(&self) -> bool {
        false
    }

    /// Render as a plain field: nothing when the value is zero.
    fn render(&self, tag: &Tag<'_>, out: &mut Vec<FlagArg>) {
        if !self.is_zero() {
            self.render_explicit(tag, out);
        }
    }

    /// Render as the target of an `Option`.
    fn render_pointee(&self, tag: &Tag<'_>, out: &mut Vec<FlagArg>) {
        self.render_explicit(tag, out);
    }
}

/// Implement [`FlagValue`] for types rendered through their `Display` output.
///
/// An empty rendering counts as the zero value.
///
/// ```
/// use std::fmt;
///
/// struct Level(&'static str);
///
/// impl fmt::Display for Level {
///     fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
///         f.write_str(self.0)
///     }
/// }
///
/// cmdopt::impl_flag_value_display!(Level);
/// ```
#[macro_export]
macro_rules! impl_flag_value_display {
    ($($ty:ty),+ $(,)?) => {
        $(
            impl $crate::FlagValue for $ty {
                fn render_explicit(&self, _tag: &$crate::Tag<'_>, out: &mut ::std::vec::Vec<$crate::FlagArg>) {
                    out.push($crate::FlagArg::Value(::std::string::ToString::to_string(self)));
                }

                fn is_zero(&self) -> bool {
                    ::std::string::ToString::to_string(self).is_empty()
                }
            }
        )+
    };
}

impl_flag_value_display!(IpAddr, Ipv4Addr, Ipv6Addr, SocketAddr);

impl FlagValue for str {
    fn render_explicit(&self, _tag: &Tag<'_>, out: &mut Vec<FlagArg>) {
        out.push(FlagArg::Value(self.to_owned()));
    }

    fn is_zero(&self) -> bool {
        self.is_empty()
    }
}

impl FlagValue for String {
    fn render_explicit(&self, tag: &Tag<'_>, out: &mut Vec<FlagArg>) {
        self.as_str().render_explicit(tag, out);
    }

    fn is_zero(&self) -> bool {
        self.is_empty()
    }
}

impl FlagValue for Path {
    fn render_explicit(&self, _tag: &Tag<'_>, out: &mut Vec<FlagArg>) {
        out.push(FlagArg::Value(self.to_string_lossy().into_owned()));
    }

    fn is_zero(&self) -> bool {
        self.as_os_str().is_empty()
    }
}

impl FlagValue for PathBuf {
    fn render_explicit(&self, tag: &Tag<'_>, out: &mut Vec<FlagArg>) {
        self.as_path().render_explicit(tag, out);
    }

    fn is_zero(&self) -> bool {
        self.as_os_str().is_empty()
    }
}

impl FlagValue for bool {
    fn render_explicit(&self, tag: &Tag<'_>, out: &mut Vec<FlagArg>) {
        if tag.noval() {
            if *self {
                out.push(FlagArg::Bare);
            }
        } else {
            out.push(FlagArg::Value(self.to_string()));
        }
    }

    fn is_zero(&self) -> bool {
        !*self
    }
}

macro_rules! impl_flag_value_number {
    ($zero:expr => $($ty:ty),+) => {
        $(
            impl FlagValue for $ty {
                fn render_explicit(&self, _tag: &Tag<'_>, out: &mut Vec<FlagArg>) {
                    out.push(FlagArg::Value(self.to_string()));
                }

                fn is_zero(&self) -> bool {
                    *self == $zero
                }
            }
        )+
    };
}

impl_flag_value_number!(0 => i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);
// Display for floats is already the shortest representation that round-trips.
impl_flag_value_number!(0.0 => f32, f64);

impl<T: FlagValue> FlagValue for [T] {
    fn render_explicit(&self, tag: &Tag<'_>, out: &mut Vec<FlagArg>) {
        for element in self {
            element.render(tag, out);
        }
    }

    fn is_zero(&self) -> bool {
        self.is_empty()
    }
}

impl<T: FlagValue> FlagValue for Vec<T> {
    fn render_explicit(&self, tag: &Tag<'_>, out: &mut Vec<FlagArg>) {
        self.as_slice().render_explicit(tag, out);
    }

    fn is_zero(&self) -> bool {
        self.is_empty()
    }
}

impl<T: FlagValue> FlagValue for Option<T> {
    fn render_explicit(&self, tag: &Tag<'_>, out: &mut Vec<FlagArg>) {
        if let Some(value) = self {
            value.render_pointee(tag, out);
        }
    }

    fn is_zero(&self) -> bool {
        self.is_none()
    }

    fn render_pointee(&self, tag: &Tag<'_>, _out: &mut Vec<FlagArg>) {
        debug!("Ignoring nested optional value for option {:?}", tag.name);
    }
}

impl<T: FlagValue + ?Sized> FlagValue for &T {
    fn render_explicit(&self, tag: &Tag<'_>, out: &mut Vec<FlagArg>) {
        (**self).render_explicit(tag, out);
    }

    fn is_zero(&self) -> bool {
        (**self).is_zero()
    }

    fn render(&self, tag: &Tag<'_>, out: &mut Vec<FlagArg>) {
        (**self).render(tag, out);
    }

    fn render_pointee(&self, tag: &Tag<'_>, out: &mut Vec<FlagArg>) {
        (**self).render_pointee(tag, out);
    }
}

impl<T: FlagValue + ?Sized> FlagValue for Box<T> {
    fn render_explicit(&self, tag: &Tag<'_>, out: &mut Vec<FlagArg>) {
        (**self).render_explicit(tag, out);
    }

    fn is_zero(&self) -> bool {
        (**self).is_zero()
    }

    fn render(&self, tag: &Tag<'_>, out: &mut Vec<FlagArg>) {
        (**self).render(tag, out);
    }

    fn render_pointee(&self, tag: &Tag<'_>, out: &mut Vec<FlagArg>) {
        (**self).render_pointee(tag, out);
    }
}

/// A field typed only by its ability to render itself as text.
///
/// Unset fields render nothing; set fields render the value's `Display`
/// output, suppressed when empty.
#[derive(Clone, Default)]
pub struct Renderable(Option<Arc<dyn fmt::Display + Send + Sync>>);

impl Renderable {
    pub fn new<T>(value: T) -> Self
    where
        T: fmt::Display + Send + Sync + 'static,
    {
        Self(Some(Arc::new(value)))
    }

    pub fn is_set(&self) -> bool {
        self.0.is_some()
    }
}

impl fmt::Debug for Renderable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.0 {
            Some(value) => write!(f, "Renderable({:?})", value.to_string()),
            None => f.write_str("Renderable(unset)"),
        }
    }
}

impl FlagValue for Renderable {
    fn render_explicit(&self, _tag: &Tag<'_>, out: &mut Vec<FlagArg>) {
        if let Some(value) = &self.0 {
            out.push(FlagArg::Value(value.to_string()));
        }
    }

    fn is_zero(&self) -> bool {
        self.0.as_ref().map_or(true, |value| value.to_string().is_empty())
    }
}

macro_rules! impl_flag_value_unsupported {
    ($kind:literal, [$($generics:tt)*] $ty:ty) => {
        impl<$($generics)*> FlagValue for $ty {
            fn render_explicit(&self, tag: &Tag<'_>, _out: &mut Vec<FlagArg>) {
                debug!("Ignoring option {:?}: {} values are not supported", tag.name, $kind);
            }
        }
    };
}

impl_flag_value_unsupported!("map", [K, V, S] HashMap<K, V, S>);
impl_flag_value_unsupported!("map", [K, V] BTreeMap<K, V>);
impl_flag_value_unsupported!("channel", [T] mpsc::Sender<T>);
impl_flag_value_unsupported!("channel", [T] mpsc::SyncSender<T>);
impl_flag_value_unsupported!("channel", [T] mpsc::Receiver<T>);
impl_flag_value_unsupported!("function", [R] fn() -> R);

#[cfg(test)]
mod tests {
    use super::*;

    fn render(value: &dyn FlagValue, raw_tag: &str) -> Vec<FlagArg> {
        let tag = Tag::parse(raw_tag);
        let mut out = Vec::new();
        value.render(&tag, &mut out);
        out
    }

    fn values(items: &[&str]) -> Vec<FlagArg> {
        items.iter().map(|v| FlagArg::Value(v.to_string())).collect()
    }

    #[test]
    fn test_scalars() {
        assert_eq!(render(&"text".to_string(), "s"), values(&["text"]));
        assert_eq!(render(&-42i64, "i"), values(&["-42"]));
        assert_eq!(render(&7u8, "u"), values(&["7"]));
        assert_eq!(render(&true, "b"), values(&["true"]));
        assert_eq!(render(&PathBuf::from("/var/thanos"), "p"), values(&["/var/thanos"]));
    }

    #[test]
    fn test_zero_suppression() {
        assert!(render(&String::new(), "s").is_empty());
        assert!(render(&0i32, "i").is_empty());
        assert!(render(&0u64, "u").is_empty());
        assert!(render(&0.0f64, "f").is_empty());
        assert!(render(&-0.0f64, "f").is_empty());
        assert!(render(&false, "b").is_empty());
        assert!(render(&PathBuf::new(), "p").is_empty());
        assert!(render(&Vec::<String>::new(), "l").is_empty());
    }

    #[test]
    fn test_floats_shortest_form() {
        assert_eq!(render(&1.5f64, "f"), values(&["1.5"]));
        assert_eq!(render(&2.0f64, "f"), values(&["2"]));
        assert_eq!(render(&0.1f32, "f"), values(&["0.1"]));
        assert_eq!(render(&0.30000000000000004f64, "f"), values(&["0.30000000000000004"]));
    }

    #[test]
    fn test_noval_bool() {
        assert_eq!(render(&true, "b,noval"), vec![FlagArg::Bare]);
        assert!(render(&false, "b,noval").is_empty());
        // noval has no effect on other types
        assert_eq!(render(&3u32, "n,noval"), values(&["3"]));
    }

    #[test]
    fn test_option_renders_zero_values() {
        assert_eq!(render(&Some(0i32), "i"), values(&["0"]));
        assert_eq!(render(&Some(String::new()), "s"), values(&[""]));
        assert_eq!(render(&Some(false), "b"), values(&["false"]));
        assert!(render(&None::<i32>, "i").is_empty());
    }

    #[test]
    fn test_option_bool_noval() {
        assert_eq!(render(&Some(true), "b,noval"), vec![FlagArg::Bare]);
        assert!(render(&Some(false), "b,noval").is_empty());
    }

    #[test]
    fn test_nested_option_is_skipped() {
        assert!(render(&Some(Some(1i32)), "i").is_empty());
        assert!(render(&Some(None::<i32>), "i").is_empty());
    }

    #[test]
    fn test_list_elements_are_zero_suppressed() {
        let list = vec!["a".to_string(), String::new(), "b".to_string()];
        assert_eq!(render(&list, "l"), values(&["a", "b"]));

        let ptrs = vec![Some(0u32), None, Some(2)];
        assert_eq!(render(&ptrs, "l"), values(&["0", "2"]));

        assert_eq!(render(&Some(vec![1u16, 2]), "l"), values(&["1", "2"]));
    }

    #[test]
    fn test_renderable() {
        assert!(render(&Renderable::default(), "r").is_empty());
        assert!(render(&Renderable::new(""), "r").is_empty());
        assert_eq!(render(&Renderable::new(3.25f64), "r"), values(&["3.25"]));
        assert_eq!(render(&Some(Renderable::new("")), "r"), values(&[""]));
    }

    #[test]
    fn test_addresses() {
        let addr: SocketAddr = "0.0.0.0:10902".parse().unwrap();
        assert_eq!(render(&addr, "a"), values(&["0.0.0.0:10902"]));
    }

    #[test]
    fn test_unsupported_kinds_render_nothing() {
        let mut map = HashMap::new();
        map.insert("k", "v");
        assert!(render(&map, "m").is_empty());

        let (tx, rx) = mpsc::channel::<u8>();
        assert!(render(&tx, "c").is_empty());
        assert!(render(&rx, "c").is_empty());

        let func: fn() -> u8 = || 1;
        assert!(render(&func, "f").is_empty());
    }

    #[test]
    fn test_into_token() {
        assert_eq!(FlagArg::Bare.into_token("--", "wait"), "--wait");
        assert_eq!(FlagArg::Value("1".into()).into_token("-", "m"), "-m=1");
    }
}
