//! Plain-text rendering of operation inputs and outputs.

/// Render a value as log text.
///
/// Strings print without quotes and numbers print as themselves. Tuples,
/// options and sequences print their structure around rendered elements.
pub trait Render {
    /// Text shown in ENTRY and RESULT lines.
    fn render(&self) -> String;
}

impl<T: Render + ?Sized> Render for &T {
    fn render(&self) -> String {
        (**self).render()
    }
}

impl<T: Render + ?Sized> Render for Box<T> {
    fn render(&self) -> String {
        (**self).render()
    }
}

impl Render for str {
    fn render(&self) -> String {
        self.to_string()
    }
}

impl Render for String {
    fn render(&self) -> String {
        self.clone()
    }
}

macro_rules! render_display {
    ($($ty:ty),* $(,)?) => {
        $(
            impl Render for $ty {
                fn render(&self) -> String {
                    self.to_string()
                }
            }
        )*
    };
}

render_display!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, bool, char);

// Floats keep their fractional part (`10.0`, not `10`).
impl Render for f32 {
    fn render(&self) -> String {
        format!("{:?}", self)
    }
}

impl Render for f64 {
    fn render(&self) -> String {
        format!("{:?}", self)
    }
}

impl Render for () {
    fn render(&self) -> String {
        "()".to_string()
    }
}

impl<T: Render> Render for Option<T> {
    fn render(&self) -> String {
        match self {
            Some(value) => format!("Some({})", value.render()),
            None => "None".to_string(),
        }
    }
}

fn render_list<'a, T: Render + 'a>(items: impl IntoIterator<Item = &'a T>) -> String {
    let items: Vec<String> = items.into_iter().map(Render::render).collect();
    format!("[{}]", items.join(", "))
}

impl<T: Render> Render for [T] {
    fn render(&self) -> String {
        render_list(self)
    }
}

impl<T: Render, const N: usize> Render for [T; N] {
    fn render(&self) -> String {
        render_list(self)
    }
}

impl<T: Render> Render for Vec<T> {
    fn render(&self) -> String {
        render_list(self)
    }
}

macro_rules! render_tuple {
    ($($name:ident),+) => {
        impl<$($name: Render),+> Render for ($($name,)+) {
            #[allow(non_snake_case)]
            fn render(&self) -> String {
                let ($($name,)+) = self;
                let parts: Vec<String> = vec![$($name.render()),+];
                format!("({})", parts.join(", "))
            }
        }
    };
}

render_tuple!(A);
render_tuple!(A, B);
render_tuple!(A, B, C);
render_tuple!(A, B, C, D);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strings_render_unquoted() {
        assert_eq!("Hello World".render(), "Hello World");
        assert_eq!(String::from("dlroW olleH").render(), "dlroW olleH");
        assert_eq!((&"nested").render(), "nested");
    }

    #[test]
    fn test_numbers_render_as_themselves() {
        assert_eq!(40i32.render(), "40");
        assert_eq!((-3i64).render(), "-3");
        assert_eq!(10.0f64.render(), "10.0");
        assert_eq!(2.5f64.render(), "2.5");
        assert_eq!(true.render(), "true");
    }

    #[test]
    fn test_structures_render_elements() {
        assert_eq!((15i32, 25i32).render(), "(15, 25)");
        assert_eq!((10.0f64, 0.0f64).render(), "(10.0, 0.0)");
        assert_eq!(("a", 1u8, 'c').render(), "(a, 1, c)");
        assert_eq!(().render(), "()");
        assert_eq!(Some("text").render(), "Some(text)");
        assert_eq!(None::<String>.render(), "None");
        assert_eq!(vec![1u32, 2, 3].render(), "[1, 2, 3]");
        assert_eq!([15i64, 25].render(), "[15, 25]");
    }
}
