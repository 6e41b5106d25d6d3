/// Odometer over alphabet indices; the last wildcard turns fastest
#[derive(Debug, Clone)]
pub struct OdometerState {
    pub(crate) indices: Vec<usize>,
    pub(crate) position: usize,
    pub(crate) exhausted: bool,
}

impl OdometerState {
    pub fn new(arity: usize, radix: usize) -> Self {
        Self {
            indices: vec![0; arity],
            position: 0,
            // With no symbols there is nothing to substitute, unless there is
            // nothing to substitute into either.
            exhausted: radix == 0 && arity > 0,
        }
    }

    pub fn advance(&mut self, radix: usize) {
        self.position += 1;
        for index in self.indices.iter_mut().rev() {
            *index += 1;
            if *index < radix {
                return;
            }
            *index = 0;
        }
        self.mark_exhausted();
    }

    pub fn mark_exhausted(&mut self) {
        self.exhausted = true;
    }
}
