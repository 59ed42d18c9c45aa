//! Catalogue of the standard error categories and how they nest.
//!
//! Each category has a name, a one-line meaning and an optional parent.
//! `ZeroDivisionError` is an `ArithmeticError`, `FileNotFoundError` is an
//! `OSError`, and so on. `IOError` survives only as an alias of `OSError`.

use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCategory {
    Timeout,
    ZeroDivision,
    Value,
    Type,
    Key,
    Index,
    Attribute,
    FileNotFound,
    Os,
    Import,
    ModuleNotFound,
    Name,
    Runtime,
    Recursion,
    Overflow,
    Arithmetic,
    Io,
    Memory,
    NotImplemented,
    Syntax,
    Indentation,
    Eof,
}

impl ErrorCategory {
    /// Every category, in catalogue order.
    pub const ALL: [ErrorCategory; 22] = [
        ErrorCategory::Timeout,
        ErrorCategory::ZeroDivision,
        ErrorCategory::Value,
        ErrorCategory::Type,
        ErrorCategory::Key,
        ErrorCategory::Index,
        ErrorCategory::Attribute,
        ErrorCategory::FileNotFound,
        ErrorCategory::Os,
        ErrorCategory::Import,
        ErrorCategory::ModuleNotFound,
        ErrorCategory::Name,
        ErrorCategory::Runtime,
        ErrorCategory::Recursion,
        ErrorCategory::Overflow,
        ErrorCategory::Arithmetic,
        ErrorCategory::Io,
        ErrorCategory::Memory,
        ErrorCategory::NotImplemented,
        ErrorCategory::Syntax,
        ErrorCategory::Indentation,
        ErrorCategory::Eof,
    ];

    pub fn name(self) -> &'static str {
        match self {
            ErrorCategory::Timeout => "TimeoutError",
            ErrorCategory::ZeroDivision => "ZeroDivisionError",
            ErrorCategory::Value => "ValueError",
            ErrorCategory::Type => "TypeError",
            ErrorCategory::Key => "KeyError",
            ErrorCategory::Index => "IndexError",
            ErrorCategory::Attribute => "AttributeError",
            ErrorCategory::FileNotFound => "FileNotFoundError",
            ErrorCategory::Os => "OSError",
            ErrorCategory::Import => "ImportError",
            ErrorCategory::ModuleNotFound => "ModuleNotFoundError",
            ErrorCategory::Name => "NameError",
            ErrorCategory::Runtime => "RuntimeError",
            ErrorCategory::Recursion => "RecursionError",
            ErrorCategory::Overflow => "OverflowError",
            ErrorCategory::Arithmetic => "ArithmeticError",
            ErrorCategory::Io => "IOError",
            ErrorCategory::Memory => "MemoryError",
            ErrorCategory::NotImplemented => "NotImplementedError",
            ErrorCategory::Syntax => "SyntaxError",
            ErrorCategory::Indentation => "IndentationError",
            ErrorCategory::Eof => "EOFError",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            ErrorCategory::Timeout => "超时错误",
            ErrorCategory::ZeroDivision => "除零错误",
            ErrorCategory::Value => "值错误",
            ErrorCategory::Type => "类型错误",
            ErrorCategory::Key => "键错误（字典中访问不存在的键）",
            ErrorCategory::Index => "索引错误（列表或元组索引超出范围）",
            ErrorCategory::Attribute => "属性错误（访问对象中不存在的属性）",
            ErrorCategory::FileNotFound => "文件未找到错误",
            ErrorCategory::Os => "操作系统错误（文件或目录访问错误）",
            ErrorCategory::Import => "导入模块错误",
            ErrorCategory::ModuleNotFound => "模块未找到错误",
            ErrorCategory::Name => "变量未定义错误",
            ErrorCategory::Runtime => "运行时错误",
            ErrorCategory::Recursion => "递归错误（递归深度超过最大限制）",
            ErrorCategory::Overflow => "数值运算结果溢出错误",
            ErrorCategory::Arithmetic => "算术运算错误（基类，包含除零、溢出等错误）",
            ErrorCategory::Io => "输入输出错误（已合并到 OSError）",
            ErrorCategory::Memory => "内存不足错误",
            ErrorCategory::NotImplemented => "方法未实现错误",
            ErrorCategory::Syntax => "语法错误",
            ErrorCategory::Indentation => "缩进错误",
            ErrorCategory::Eof => "输入流到达文件末尾错误",
        }
    }

    /// The category this one specialises, if any.
    ///
    /// `Io` reports `Os` as its parent even though the two are the same
    /// category; see [`ErrorCategory::canonical`].
    pub fn parent(self) -> Option<ErrorCategory> {
        match self {
            ErrorCategory::ZeroDivision | ErrorCategory::Overflow => Some(ErrorCategory::Arithmetic),
            ErrorCategory::FileNotFound | ErrorCategory::Timeout | ErrorCategory::Io => {
                Some(ErrorCategory::Os)
            }
            ErrorCategory::ModuleNotFound => Some(ErrorCategory::Import),
            ErrorCategory::Recursion | ErrorCategory::NotImplemented => Some(ErrorCategory::Runtime),
            ErrorCategory::Indentation => Some(ErrorCategory::Syntax),
            _ => None,
        }
    }

    /// Resolves aliases. Only `Io` has one.
    pub fn canonical(self) -> ErrorCategory {
        match self {
            ErrorCategory::Io => ErrorCategory::Os,
            other => other,
        }
    }

    /// True if `self` is `other` or specialises it, directly or not.
    pub fn is_a(self, other: ErrorCategory) -> bool {
        let target = other.canonical();
        let mut current = Some(self.canonical());
        while let Some(category) = current {
            if category == target {
                return true;
            }
            current = category.parent().map(ErrorCategory::canonical);
        }
        false
    }

    /// Chain from `self` up to its root, starting with `self`.
    pub fn ancestry(self) -> Vec<ErrorCategory> {
        let mut chain = vec![self];
        let mut current = self.parent();
        while let Some(category) = current {
            chain.push(category);
            current = category.parent();
        }
        chain
    }
}

impl fmt::Display for ErrorCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Implemented by every error type in this crate.
pub trait Categorized {
    fn category(&self) -> ErrorCategory;
}

/// One line per category: `Name - meaning`, with the parent chain for
/// specialised categories.
pub fn render() -> Vec<String> {
    ErrorCategory::ALL
        .iter()
        .map(|category| match category.parent() {
            Some(_) => {
                let chain: Vec<&str> = category.ancestry().iter().map(|c| c.name()).collect();
                format!(
                    "{} - {} ({})",
                    category.name(),
                    category.description(),
                    chain.join(" -> ")
                )
            }
            None => format!("{} - {}", category.name(), category.description()),
        })
        .collect()
}
