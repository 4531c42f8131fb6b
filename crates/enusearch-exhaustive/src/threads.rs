// Copyright (c) 2025 Felix Kahle.
//
// Permission is hereby granted, free of charge, to any person obtaining
// a copy of this software and associated documentation files (the
// "Software"), to deal in the Software without restriction, including
// without limitation the rights to use, copy, modify, merge, publish,
// distribute, sublicense, and/or sell copies of the Software, and to
// permit persons to whom the Software is furnished to do so, subject to
// the following conditions:
//
// The above copyright notice and this permission notice shall be
// included in all copies or substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND,
// EXPRESS OR IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF
// MERCHANTABILITY, FITNESS FOR A PARTICULAR PURPOSE AND
// NONINFRINGEMENT. IN NO EVENT SHALL THE AUTHORS OR COPYRIGHT HOLDERS BE
// LIABLE FOR ANY CLAIM, DAMAGES OR OTHER LIABILITY, WHETHER IN AN ACTION
// OF CONTRACT, TORT OR OTHERWISE, ARISING FROM, OUT OF OR IN CONNECTION
// WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE SOFTWARE.

/// How many worker threads an exhaustive search may use.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Threads {
    /// Exactly this many workers. Zero is treated as one.
    Fixed(usize),
    /// One worker per available CPU.
    All,
    /// One worker per available CPU but one, at least one.
    AllButOne,
    /// A single worker on the calling thread.
    #[default]
    Single,
}

impl Threads {
    /// Interprets a job count: `-1` uses all CPUs, `-2` all but one, `0`
    /// and `1` run on the calling thread, and any other positive number is a
    /// fixed worker count. Returns `None` for other negative numbers.
    pub fn from_n_jobs(n_jobs: isize) -> Option<Self> {
        match n_jobs {
            -1 => Some(Threads::All),
            -2 => Some(Threads::AllButOne),
            0 | 1 => Some(Threads::Single),
            n if n > 1 => Some(Threads::Fixed(n as usize)),
            _ => None,
        }
    }

    /// Returns the number of workers to spawn on this machine.
    pub fn resolve(&self) -> usize {
        let available = || {
            std::thread::available_parallelism()
                .map(|n| n.get())
                .unwrap_or(1)
        };

        match *self {
            Threads::Fixed(n) => n.max(1),
            Threads::All => available(),
            Threads::AllButOne => available().saturating_sub(1).max(1),
            Threads::Single => 1,
        }
    }
}

impl std::fmt::Display for Threads {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Threads::Fixed(n) => write!(f, "Fixed({})", n),
            Threads::All => write!(f, "All"),
            Threads::AllButOne => write!(f, "AllButOne"),
            Threads::Single => write!(f, "Single"),
        }
    }
}
