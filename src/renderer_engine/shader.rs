use anyhow::{anyhow, Result};
use gl::types::*;
use regex::Regex;
use std::{ffi::CString, ptr};

lazy_static::lazy_static! {
    /// Formats de log GLSL connus ; le groupe 2 contient toujours le numéro de ligne.
    /// - "0:12(105): ..."  (Mesa/Intel)
    /// - "0(12) : error"   (NVIDIA)
    /// - "ERROR: 0:12: ..." (AMD)
    static ref GLSL_LINE_PATTERNS: [Regex; 3] = [
        Regex::new(r"(\d+):(\d+)\((\d+)\)").expect("valid regex"),
        Regex::new(r"(\d+)\((\d+)\)\s*:").expect("valid regex"),
        Regex::new(r":\s*(\d+):(\d+):").expect("valid regex"),
    ];
}

/// Compile et lie un programme shader (vertex + fragment).
///
/// En cas d'échec, l'erreur contient le log du driver et, si la ligne fautive
/// a pu être retrouvée, un extrait du source autour de celle-ci.
///
/// # Safety
/// Un contexte OpenGL valide doit être actif sur le thread appelant.
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
    let c_str = CString::new(src).map_err(|e| anyhow!("CString error: {}", e))?;
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

    let log_cow = String::from_utf8_lossy(&buf);
    let log = log_cow.trim_matches(char::from(0));
    let mut message = format!("❌ Shader compilation failed:\n{}", log);
    if let Some(line) = parse_glsl_error_line(log) {
        message.push_str(&format_glsl_error_context(src, line));
    }
    Err(anyhow!(message))
}

/// Extrait le numéro de ligne d'un log d'erreur GLSL.
fn parse_glsl_error_line(log: &str) -> Option<usize> {
    GLSL_LINE_PATTERNS.iter().find_map(|re| {
        re.captures(log)
            .and_then(|cap| cap.get(2))
            .and_then(|m| m.as_str().parse::<usize>().ok())
    })
}

/// Formate un extrait du code GLSL autour de la ligne fautive.
fn format_glsl_error_context(src: &str, line_number: usize) -> String {
    const CONTEXT: usize = 2; // nb de lignes avant/après

    let lines: Vec<&str> = src.lines().collect();
    if lines.is_empty() || line_number == 0 {
        return String::new();
    }

    let start = line_number.saturating_sub(1 + CONTEXT).min(lines.len());
    let end = (line_number + CONTEXT).min(lines.len());

    let mut output = format!("\n🔍 Error context (line {}):\n", line_number);
    for (offset, line) in lines[start..end].iter().enumerate() {
        let current = start + offset + 1;
        let marker = if current == line_number { '>' } else { ' ' };
        output.push_str(&format!("{} {:>3} | {}\n", marker, current, line));
    }
    output
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_glsl_error_line_vendors() {
        assert_eq!(parse_glsl_error_line("0:12(105): error: undefined"), Some(12));
        assert_eq!(parse_glsl_error_line("0(7) : error C1000: oops"), Some(7));
        assert_eq!(parse_glsl_error_line("ERROR: 0:3: 'x' : undeclared"), Some(3));
        assert_eq!(parse_glsl_error_line("no line info here"), None);
    }

    #[test]
    fn test_error_context_marks_faulty_line() {
        let src = "a\nb\nc\nd\ne";
        let out = format_glsl_error_context(src, 3);
        assert!(out.contains(">   3 | c"));
        assert!(out.contains("    1 | a"));
        assert!(out.contains("    5 | e"));
    }

    #[test]
    fn test_error_context_out_of_range_does_not_panic() {
        assert_eq!(format_glsl_error_context("", 1), "");
        let out = format_glsl_error_context("only", 40);
        assert!(!out.contains('>'));
    }
}
