//! Shared object that removes the preload-list variable from its host.
//!
//! Load it through the preload list next to the library whose injection
//! should stop at the current process:
//!
//! ```text
//! LD_PRELOAD="/usr/lib/gl4es/libGL.so.1 /usr/lib/libunset_preload.so" emulationstation
//! ```
//!
//! The loader maps every listed library and runs their initializers before
//! `main`, then runs ours, which unsets `LD_PRELOAD`. gl4es stays mapped in
//! the host, but shell commands the host runs later start without it and
//! cannot print its banner into captured output.

#[cfg(not(any(
    target_os = "linux",
    target_os = "android",
    target_os = "freebsd",
    target_os = "netbsd",
    target_os = "openbsd",
    target_os = "dragonfly",
    target_os = "illumos",
    target_os = "solaris",
    target_vendor = "apple",
)))]
compile_error!("unset-preload needs a loader with an initializer table (ELF .init_array or Mach-O __mod_init_func)");

/// Initializer table entry run by the loader when this object is mapped.
#[used]
#[cfg_attr(not(target_vendor = "apple"), link_section = ".init_array")]
#[cfg_attr(target_vendor = "apple", link_section = "__DATA,__mod_init_func")]
static SCRUB_ON_LOAD: extern "C" fn() = scrub_on_load;

extern "C" fn scrub_on_load() {
    preload_core::scrub_preload();
}
