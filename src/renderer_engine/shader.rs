use anyhow::{anyhow, Result};
use gl::types::*;
use regex::Regex;
use std::{ffi::CString, ptr};

lazy_static::lazy_static! {
    /// Formats de log GLSL connus ; le groupe 1 est toujours le numéro de ligne.
    /// - "0:12(105): ..."  (Mesa / Intel)
    /// - "0(12) : ..."     (NVIDIA)
    /// - "ERROR: 0:12: ..." (AMD)
    static ref GLSL_ERROR_PATTERNS: [Regex; 3] = [
        Regex::new(r"\d+:(\d+)\(\d+\)").expect("valid regex"),
        Regex::new(r"\d+\((\d+)\)\s*:").expect("valid regex"),
        Regex::new(r":\s*\d+:(\d+):").expect("valid regex"),
    ];
}

/// Compile et lie un programme vertex + fragment.
///
/// En cas d'échec, l'erreur contient le log du driver et, si la ligne fautive
/// a pu être retrouvée, un extrait du source autour de cette ligne.
///
/// # Safety
/// Le contexte OpenGL doit être courant sur ce thread.
pub unsafe fn compile_shader_program(vertex_src: &str, fragment_src: &str) -> Result<u32> {
    let vs = compile_stage(vertex_src, gl::VERTEX_SHADER)?;
    let fs = match compile_stage(fragment_src, gl::FRAGMENT_SHADER) {
        Ok(fs) => fs,
        Err(e) => {
            gl::DeleteShader(vs);
            return Err(e);
        }
    };

    let program = gl::CreateProgram();
    gl::AttachShader(program, vs);
    gl::AttachShader(program, fs);
    gl::LinkProgram(program);
    gl::DeleteShader(vs);
    gl::DeleteShader(fs);

    let mut success = gl::FALSE as GLint;
    gl::GetProgramiv(program, gl::LINK_STATUS, &mut success);
    if success != gl::TRUE as GLint {
        let mut len = 0;
        gl::GetProgramiv(program, gl::INFO_LOG_LENGTH, &mut len);
        let mut buf = vec![0u8; len.max(0) as usize];
        gl::GetProgramInfoLog(program, len, ptr::null_mut(), buf.as_mut_ptr() as *mut _);
        gl::DeleteProgram(program);
        return Err(anyhow!(
            "❌ Shader link failed:\n{}",
            String::from_utf8_lossy(&buf).trim_matches(char::from(0))
        ));
    }

    Ok(program)
}

unsafe fn compile_stage(src: &str, ty: GLenum) -> Result<u32> {
    let c_str = CString::new(src)?;
    let shader = gl::CreateShader(ty);
    gl::ShaderSource(shader, 1, &c_str.as_ptr(), ptr::null());
    gl::CompileShader(shader);

    let mut success = gl::FALSE as GLint;
    gl::GetShaderiv(shader, gl::COMPILE_STATUS, &mut success);
    if success == gl::TRUE as GLint {
        return Ok(shader);
    }

    let mut len = 0;
    gl::GetShaderiv(shader, gl::INFO_LOG_LENGTH, &mut len);
    let mut buf = vec![0u8; len.max(0) as usize];
    gl::GetShaderInfoLog(shader, len, ptr::null_mut(), buf.as_mut_ptr() as *mut _);
    gl::DeleteShader(shader);

    let log = String::from_utf8_lossy(&buf);
    let log = log.trim_matches(char::from(0));
    let mut message = format!("❌ Shader compilation failed:\n{}", log);
    if let Some(line) = parse_glsl_error_line(log) {
        message.push_str(&format_glsl_error_context(src, line));
    }
    Err(anyhow!(message))
}

/// Numéro de ligne de la première erreur du log GLSL.
fn parse_glsl_error_line(log: &str) -> Option<usize> {
    GLSL_ERROR_PATTERNS.iter().find_map(|re| {
        re.captures(log)
            .and_then(|cap| cap.get(1))
            .and_then(|m| m.as_str().parse().ok())
    })
}

/// Extrait du source (±2 lignes) autour de la ligne fautive (1-indexée).
fn format_glsl_error_context(src: &str, line_number: usize) -> String {
    const CONTEXT: usize = 2;

    let lines: Vec<&str> = src.lines().collect();
    if lines.is_empty() || line_number == 0 || line_number > lines.len() {
        return String::new();
    }

    let first = line_number.saturating_sub(CONTEXT).max(1);
    let last = (line_number + CONTEXT).min(lines.len());

    let mut output = format!("\n🔍 Error context (line {}):\n", line_number);
    for n in first..=last {
        let line = lines[n - 1];
        if n == line_number {
            output.push_str(&format!("> {:>3} | {}\n", n, line));
            output.push_str(&format!("        {}\n", "^".repeat(line.len().min(80))));
        } else {
            output.push_str(&format!("  {:>3} | {}\n", n, line));
        }
    }
    output
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_glsl_error_line_vendor_formats() {
        assert_eq!(parse_glsl_error_line("0:12(105): error: undefined variable"), Some(12));
        assert_eq!(parse_glsl_error_line("0(7) : error C1000: undefined"), Some(7));
        assert_eq!(
            parse_glsl_error_line("ERROR: 0:42: 'vColor' : undeclared identifier"),
            Some(42)
        );
        assert_eq!(parse_glsl_error_line("link error without line"), None);
        assert_eq!(parse_glsl_error_line(""), None);
    }

    #[test]
    fn test_format_glsl_error_context_marks_line() {
        let src = "#version 330 core\nin vec2 uv;\nout vec4 c;\nvoid main() {\n  c = vec4(uv, 0.0);\n}";
        let out = format_glsl_error_context(src, 5);
        assert!(out.contains("Error context (line 5)"));
        assert!(out.contains(">   5 |   c = vec4(uv, 0.0);"));
        assert!(out.contains("    3 | out vec4 c;"));
        assert!(!out.contains("in vec2 uv;"));
    }

    #[test]
    fn test_format_glsl_error_context_out_of_range() {
        assert_eq!(format_glsl_error_context("", 1), "");
        assert_eq!(format_glsl_error_context("void main() {}", 0), "");
        assert_eq!(format_glsl_error_context("void main() {}", 10), "");
    }
}
