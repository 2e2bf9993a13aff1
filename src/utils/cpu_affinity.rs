//! Thread-to-core pinning for stable timing measurements.
//!
//! Real affinity control exists on Linux via libc; other platforms get a
//! no-op fallback so the harness still runs, just without pinning.

#[cfg(target_os = "linux")]
mod platform {
    use std::cell::RefCell;

    thread_local! {
        static ORIGINAL_AFFINITY: RefCell<Option<libc::cpu_set_t>> = const { RefCell::new(None) };
    }

    fn current_cpu() -> Option<usize> {
        let cpu = unsafe { libc::sched_getcpu() };
        (cpu >= 0).then(|| cpu as usize)
    }

    /// Pin the calling thread to the core it is currently running on,
    /// saving the previous mask so it can be restored.
    pub fn pin_to_current_core() -> Option<usize> {
        unsafe {
            let mut saved: libc::cpu_set_t = std::mem::zeroed();
            if libc::sched_getaffinity(0, std::mem::size_of::<libc::cpu_set_t>(), &mut saved) != 0
            {
                return None;
            }

            let core = current_cpu().unwrap_or(0);
            let mut set: libc::cpu_set_t = std::mem::zeroed();
            libc::CPU_ZERO(&mut set);
            libc::CPU_SET(core, &mut set);
            if libc::sched_setaffinity(0, std::mem::size_of::<libc::cpu_set_t>(), &set) != 0 {
                return None;
            }

            ORIGINAL_AFFINITY.with(|cell| *cell.borrow_mut() = Some(saved));
            Some(core)
        }
    }

    /// Restore the affinity mask saved by `pin_to_current_core`.
    pub fn unpin() -> bool {
        ORIGINAL_AFFINITY.with(|cell| {
            if let Some(saved) = cell.borrow_mut().take() {
                unsafe {
                    libc::sched_setaffinity(0, std::mem::size_of::<libc::cpu_set_t>(), &saved)
                        == 0
                }
            } else {
                false
            }
        })
    }
}

#[cfg(not(target_os = "linux"))]
mod platform {
    pub fn pin_to_current_core() -> Option<usize> {
        None
    }

    pub fn unpin() -> bool {
        false
    }
}

/// Pin the current thread to the core it is running on.
///
/// Returns the pinned core ID, or `None` if pinning is unavailable.
pub fn pin_to_current_core() -> Option<usize> {
    platform::pin_to_current_core()
}

/// Unpin the current thread, restoring its original CPU affinity.
pub fn unpin() -> bool {
    platform::unpin()
}

/// RAII guard: pins on creation, unpins on drop, even on panic.
pub struct CpuPinGuard {
    pinned_core: Option<usize>,
}

impl CpuPinGuard {
    pub fn new() -> Self {
        Self {
            pinned_core: pin_to_current_core(),
        }
    }

    pub fn is_pinned(&self) -> bool {
        self.pinned_core.is_some()
    }
}

impl Drop for CpuPinGuard {
    fn drop(&mut self) {
        if self.pinned_core.is_some() {
            unpin();
        }
    }
}

impl Default for CpuPinGuard {
    fn default() -> Self {
        Self::new()
    }
}
