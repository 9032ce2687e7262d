//! Call-site capturing macros
//!
//! `call_site!()` builds a [`CallSite`](crate::CallSite) from `file!()`,
//! `line!()` and the enclosing function, rendered as `name()`.
//! The `console_*!` macros forward to the matching `Printer` method with a
//! captured call site. Append `, context` to include it in the output:
//!
//! ```
//! use devprint::{Printer, Profile, RunMode, console_info};
//!
//! let printer = Printer::new(Profile::Full, RunMode::Test);
//! console_info!(printer, "cache warmed", context);
//! assert!(printer.last_output().starts_with("[⚪️ - Info] cache warmed Context: [File: "));
//! ```

/// Name of the enclosing function, closures stripped
#[doc(hidden)]
#[macro_export]
macro_rules! __function_name {
    () => {{
        fn __here() {}
        fn type_name_of<T>(_: T) -> &'static str {
            ::std::any::type_name::<T>()
        }
        let name = type_name_of(__here);
        let name = name.strip_suffix("::__here").unwrap_or(name);
        let name = name.trim_end_matches("::{{closure}}");
        name.rsplit("::").next().unwrap_or(name)
    }};
}

#[macro_export]
macro_rules! call_site {
    () => {
        $crate::CallSite::new(
            file!(),
            ::std::format!("{}()", $crate::__function_name!()),
            line!(),
        )
    };
}

#[macro_export]
macro_rules! console_print {
    ($printer:expr, $severity:expr, $msg:expr) => {
        $printer.emit($severity, $msg, false, &$crate::call_site!())
    };
    ($printer:expr, $severity:expr, $msg:expr, context) => {
        $printer.emit($severity, $msg, true, &$crate::call_site!())
    };
}

#[macro_export]
macro_rules! console_success {
    ($printer:expr, $msg:expr) => {
        $printer.success_at($msg, false, &$crate::call_site!())
    };
    ($printer:expr, $msg:expr, context) => {
        $printer.success_at($msg, true, &$crate::call_site!())
    };
}

#[macro_export]
macro_rules! console_info {
    ($printer:expr, $msg:expr) => {
        $printer.info_at($msg, false, &$crate::call_site!())
    };
    ($printer:expr, $msg:expr, context) => {
        $printer.info_at($msg, true, &$crate::call_site!())
    };
}

#[macro_export]
macro_rules! console_warning {
    ($printer:expr, $msg:expr) => {
        $printer.warning_at($msg, false, &$crate::call_site!())
    };
    ($printer:expr, $msg:expr, context) => {
        $printer.warning_at($msg, true, &$crate::call_site!())
    };
}

#[macro_export]
macro_rules! console_error {
    ($printer:expr, $msg:expr) => {
        $printer.error_at($msg, false, &$crate::call_site!())
    };
    ($printer:expr, $msg:expr, context) => {
        $printer.error_at($msg, true, &$crate::call_site!())
    };
}
