use std::borrow::Cow;

/// Trait for macros to convert owned/borrowed byte sources to `Cow`.
///
/// `&str` and `String` have no `From` conversion into `Cow<_, [u8]>`, and
/// going through `AsRef<[u8]>` would implicitly borrow owned arguments. This
/// trait keeps macro behavior intuitive: borrowed inputs stay borrowed and
/// owned inputs stay owned.
pub trait BCowConvert<'a> {
    fn convert(self) -> Cow<'a, [u8]>;
}

impl<'a> BCowConvert<'a> for &'a [u8] {
    fn convert(self) -> Cow<'a, [u8]> {
        self.into()
    }
}

impl<'a> BCowConvert<'a> for &'a str {
    fn convert(self) -> Cow<'a, [u8]> {
        self.as_bytes().into()
    }
}

impl BCowConvert<'static> for String {
    fn convert(self) -> Cow<'static, [u8]> {
        self.into_bytes().into()
    }
}

impl BCowConvert<'static> for Vec<u8> {
    fn convert(self) -> Cow<'static, [u8]> {
        self.into()
    }
}
