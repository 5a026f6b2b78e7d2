/// How members are indented inside `{ ... }` bodies when serializing.
///
/// Defaults to two spaces.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Indentation {
    width: usize,
    ch: char,
}

impl Indentation {
    pub fn new(width: usize, ch: char) -> Self {
        Self { width, ch }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn ch(&self) -> char {
        self.ch
    }

    pub fn as_string(&self) -> String {
        std::iter::repeat_n(self.ch, self.width).collect()
    }
}

impl Default for Indentation {
    fn default() -> Self {
        Self::new(2, ' ')
    }
}
