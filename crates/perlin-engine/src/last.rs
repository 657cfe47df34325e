//! Caller-owned record of the most recently built kernel

use perlin_kernels::Kernel;

/// The kernel last handed out by [`KernelFactory::rebuild`]
///
/// Owned by the caller, typically alongside whatever displays the noise, so
/// the factory itself stays free of cross-call state.
///
/// [`KernelFactory::rebuild`]: crate::KernelFactory::rebuild
#[derive(Debug, Clone, Default)]
pub struct LastKernel {
    kernel: Option<Kernel>,
}

impl LastKernel {
    /// Nothing built yet
    pub fn new() -> Self {
        Self::default()
    }

    /// The recorded kernel, if any
    pub fn get(&self) -> Option<&Kernel> {
        self.kernel.as_ref()
    }

    /// Record `kernel`, returning the previous one
    pub fn replace(&mut self, kernel: Kernel) -> Option<Kernel> {
        self.kernel.replace(kernel)
    }

    /// Forget the recorded kernel so the next rebuild always redraws
    pub fn clear(&mut self) -> Option<Kernel> {
        self.kernel.take()
    }

    /// Whether no kernel has been recorded
    pub fn is_empty(&self) -> bool {
        self.kernel.is_none()
    }
}

/// The most recently built kernel recorded in `last`
pub fn last_kernel(last: &LastKernel) -> Option<&Kernel> {
    last.get()
}
