use gl::types::*;
use log::{debug, error, info, warn};
use std::collections::HashMap;
use std::ffi::CStr;
use std::os::raw::c_void;
use std::sync::Mutex;

lazy_static::lazy_static! {
    /// Nombre d'occurrences de chaque message de debug OpenGL, par ID.
    static ref MESSAGE_COUNT: Mutex<HashMap<u32, u32>> = Mutex::new(HashMap::new());
}

#[macro_export]
macro_rules! cstr {
    ($s:expr) => {
        concat!($s, "\0").as_ptr() as *const i8
    };
}

unsafe fn gl_string(name: GLenum) -> String {
    let ptr = gl::GetString(name);
    if ptr.is_null() {
        return "Unknown".into();
    }
    CStr::from_ptr(ptr as *const i8)
        .to_string_lossy()
        .into_owned()
}

/// Affiche les informations OpenGL / GPU du contexte actuel
///
/// # Safety
/// L'appelant doit s'assurer que le contexte OpenGL est valide et actif.
pub unsafe fn show_opengl_context_info() {
    info!("🖥 OpenGL context info:");
    info!("  Vendor   : {}", gl_string(gl::VENDOR));
    info!("  Renderer : {}", gl_string(gl::RENDERER));
    info!("  OpenGL   : {}", gl_string(gl::VERSION));
    info!("  GLSL     : {}", gl_string(gl::SHADING_LANGUAGE_VERSION));

    let mut num_ext = 0;
    gl::GetIntegerv(gl::NUM_EXTENSIONS, &mut num_ext);
    debug!("  Extensions: {} extensions detected", num_ext);

    // Consommer le glerror si nécessaire
    let err = gl::GetError();
    if err != gl::NO_ERROR {
        warn!("glerror consumed after getting context info: 0x{:X}", err);
    }
}

/// Faut-il loguer la n-ième occurrence d'un message ? (1re, puis une sur 60)
fn should_log_occurrence(id: u32) -> bool {
    let Ok(mut counts) = MESSAGE_COUNT.lock() else {
        return true;
    };
    let count = counts.entry(id).or_insert(0);
    *count += 1;
    *count == 1 || *count % 60 == 0
}

fn debug_source_label(source: GLenum) -> &'static str {
    match source {
        gl::DEBUG_SOURCE_API => "api",
        gl::DEBUG_SOURCE_WINDOW_SYSTEM => "window-system",
        gl::DEBUG_SOURCE_SHADER_COMPILER => "shader-compiler",
        gl::DEBUG_SOURCE_THIRD_PARTY => "third-party",
        gl::DEBUG_SOURCE_APPLICATION => "application",
        _ => "other",
    }
}

fn debug_type_label(type_: GLenum) -> &'static str {
    match type_ {
        gl::DEBUG_TYPE_ERROR => "error",
        gl::DEBUG_TYPE_DEPRECATED_BEHAVIOR => "deprecated",
        gl::DEBUG_TYPE_UNDEFINED_BEHAVIOR => "undefined-behavior",
        gl::DEBUG_TYPE_PORTABILITY => "portability",
        gl::DEBUG_TYPE_PERFORMANCE => "performance",
        _ => "other",
    }
}

extern "system" fn gl_debug_callback(
    source: GLenum,
    type_: GLenum,
    id: GLuint,
    severity: GLenum,
    _length: GLsizei,
    message: *const i8,
    _user_param: *mut c_void,
) {
    if severity == gl::DEBUG_SEVERITY_NOTIFICATION || !should_log_occurrence(id) {
        return;
    }

    let msg = unsafe { CStr::from_ptr(message).to_string_lossy() };
    let line = format!(
        "[gl:{}/{}] #{:X} {}",
        debug_source_label(source),
        debug_type_label(type_),
        id,
        msg
    );
    if type_ == gl::DEBUG_TYPE_ERROR || severity == gl::DEBUG_SEVERITY_HIGH {
        error!("{}", line);
    } else {
        warn!("{}", line);
    }
}

/// Active le debug OpenGL via `glDebugMessageCallback`, si le driver l'expose
/// (OpenGL 4.3 ou KHR_debug).
///
/// # Safety
/// Le contexte OpenGL doit être actif et le rester tant que le callback est enregistré.
pub unsafe fn setup_opengl_debug() {
    if !gl::DebugMessageCallback::is_loaded() {
        debug!("glDebugMessageCallback not available, OpenGL debug output disabled");
        return;
    }

    gl::Enable(gl::DEBUG_OUTPUT);
    gl::Enable(gl::DEBUG_OUTPUT_SYNCHRONOUS); // important pour que le callback soit synchrone
    gl::DebugMessageCallback(Some(gl_debug_callback), std::ptr::null());
}

/// Taille mémoire lisible, pour les logs d'allocation GPU.
pub fn format_bytes(size: usize) -> String {
    const UNITS: [(&str, f64); 2] = [("MB", 1024.0 * 1024.0), ("KB", 1024.0)];

    UNITS
        .iter()
        .find(|(_, scale)| size as f64 >= *scale)
        .map(|(unit, scale)| format!("{:.3} {}", size as f64 / scale, unit))
        .unwrap_or_else(|| format!("{} bytes", size))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::ffi::CStr;

    #[test]
    fn test_format_bytes() {
        assert_eq!(format_bytes(0), "0 bytes");
        assert_eq!(format_bytes(1023), "1023 bytes");
        assert_eq!(format_bytes(1536), "1.500 KB");
        assert_eq!(format_bytes(3 * 1024 * 1024), "3.000 MB");
    }

    #[test]
    fn test_cstr_macro() {
        let ptr = cstr!("uCanvasSize");
        let c_str = unsafe { CStr::from_ptr(ptr) };
        assert_eq!(c_str.to_str().unwrap(), "uCanvasSize");
    }

    #[test]
    fn test_debug_labels() {
        assert_eq!(debug_source_label(gl::DEBUG_SOURCE_SHADER_COMPILER), "shader-compiler");
        assert_eq!(debug_type_label(gl::DEBUG_TYPE_ERROR), "error");
        assert_eq!(debug_type_label(0xDEAD), "other");
    }

    #[test]
    fn test_debug_message_rate_limit() {
        // ID propre à ce test pour éviter les collisions
        let id = 0x0F1E_2D3C;
        let logged: Vec<bool> = (0..120).map(|_| should_log_occurrence(id)).collect();

        assert!(logged[0]);
        assert!(!logged[1]);
        assert!(logged[59]);
        assert!(logged[119]);
        assert_eq!(logged.iter().filter(|&&l| l).count(), 3);
    }
}
