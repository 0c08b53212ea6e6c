//! 表达式定义
//!
//! 提供计划节点使用的最小表达式语法：列引用、字面量、一元/二元运算、
//! 函数调用。通用的表达式重写不在本库范围内，这里只需要能表达过滤
//! 谓词、连接条件（列等值的合取）和命名投影。

use std::fmt;

use super::value::Value;

/// 一元运算符
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UnaryOp {
    Not,
    Neg,
}

impl fmt::Display for UnaryOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UnaryOp::Not => write!(f, "NOT"),
            UnaryOp::Neg => write!(f, "-"),
        }
    }
}

/// 二元运算符
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BinaryOp {
    Eq,
    Ne,
    Lt,
    Le,
    Gt,
    Ge,
    And,
    Or,
    Add,
    Sub,
    Mul,
    Div,
}

impl BinaryOp {
    pub fn as_str(&self) -> &'static str {
        match self {
            BinaryOp::Eq => "=",
            BinaryOp::Ne => "!=",
            BinaryOp::Lt => "<",
            BinaryOp::Le => "<=",
            BinaryOp::Gt => ">",
            BinaryOp::Ge => ">=",
            BinaryOp::And => "AND",
            BinaryOp::Or => "OR",
            BinaryOp::Add => "+",
            BinaryOp::Sub => "-",
            BinaryOp::Mul => "*",
            BinaryOp::Div => "/",
        }
    }
}

impl fmt::Display for BinaryOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// 表达式
#[derive(Debug, Clone, PartialEq)]
pub enum Expression {
    /// 列引用
    Column(String),
    /// 字面量
    Literal(Value),
    /// 一元运算
    Unary {
        op: UnaryOp,
        operand: Box<Expression>,
    },
    /// 二元运算
    Binary {
        op: BinaryOp,
        left: Box<Expression>,
        right: Box<Expression>,
    },
    /// 函数调用
    Function { name: String, args: Vec<Expression> },
}

impl Expression {
    /// 创建列引用表达式
    pub fn column(name: impl Into<String>) -> Self {
        Expression::Column(name.into())
    }

    /// 创建字面量表达式
    pub fn literal(value: Value) -> Self {
        Expression::Literal(value)
    }

    /// 创建二元运算表达式
    pub fn binary(op: BinaryOp, left: Expression, right: Expression) -> Self {
        Expression::Binary {
            op,
            left: Box::new(left),
            right: Box::new(right),
        }
    }

    /// 将多个表达式用 AND 连接（左结合）
    pub fn and_all(exprs: Vec<Expression>) -> Option<Expression> {
        let mut iter = exprs.into_iter();
        let first = iter.next()?;
        Some(iter.fold(first, |acc, e| Expression::binary(BinaryOp::And, acc, e)))
    }

    /// 收集表达式中引用的所有列名（按出现顺序，不去重）
    fn collect_column_refs(&self, refs: &mut Vec<String>) {
        match self {
            Expression::Column(name) => refs.push(name.clone()),
            Expression::Literal(_) => {}
            Expression::Unary { operand, .. } => operand.collect_column_refs(refs),
            Expression::Binary { left, right, .. } => {
                left.collect_column_refs(refs);
                right.collect_column_refs(refs);
            }
            Expression::Function { args, .. } => {
                for arg in args {
                    arg.collect_column_refs(refs);
                }
            }
        }
    }

    /// 返回表达式引用的列名列表
    pub fn column_refs(&self) -> Vec<String> {
        let mut refs = Vec::new();
        self.collect_column_refs(&mut refs);
        refs
    }
}

impl fmt::Display for Expression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Expression::Column(name) => write!(f, "{}", name),
            Expression::Literal(value) => write!(f, "{}", value),
            Expression::Unary { op, operand } => write!(f, "({} {})", op, operand),
            Expression::Binary { op, left, right } => {
                write!(f, "({} {} {})", left, op, right)
            }
            Expression::Function { name, args } => {
                let rendered: Vec<String> = args.iter().map(|a| a.to_string()).collect();
                write!(f, "{}({})", name, rendered.join(", "))
            }
        }
    }
}

/// 命名投影列
///
/// 投影节点的一个输出：表达式加输出名
#[derive(Debug, Clone, PartialEq)]
pub struct NamedColumn {
    pub expression: Expression,
    pub alias: String,
}

impl NamedColumn {
    pub fn new(expression: Expression, alias: impl Into<String>) -> Self {
        Self {
            expression,
            alias: alias.into(),
        }
    }

    /// 直接透传一个列引用，输出名与列名相同
    pub fn column(name: impl AsRef<str>) -> Self {
        let name = name.as_ref().to_string();
        Self {
            expression: Expression::Column(name.clone()),
            alias: name,
        }
    }
}

impl fmt::Display for NamedColumn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.expression {
            Expression::Column(name) if *name == self.alias => write!(f, "{}", self.alias),
            expr => write!(f, "{} AS {}", expr, self.alias),
        }
    }
}

/// 聚合函数
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AggregateFunc {
    Count,
    Sum,
    Min,
    Max,
    Avg,
}

impl AggregateFunc {
    pub fn as_str(&self) -> &'static str {
        match self {
            AggregateFunc::Count => "count",
            AggregateFunc::Sum => "sum",
            AggregateFunc::Min => "min",
            AggregateFunc::Max => "max",
            AggregateFunc::Avg => "avg",
        }
    }
}

/// 聚合调用
///
/// `arg` 为 None 时表示 count(*) 形式
#[derive(Debug, Clone, PartialEq)]
pub struct AggregateCall {
    pub func: AggregateFunc,
    pub arg: Option<Expression>,
    pub alias: String,
}

impl AggregateCall {
    pub fn new(func: AggregateFunc, arg: Option<Expression>, alias: impl Into<String>) -> Self {
        Self {
            func,
            arg,
            alias: alias.into(),
        }
    }
}

impl fmt::Display for AggregateCall {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.arg {
            Some(arg) => write!(f, "{}({}) AS {}", self.func.as_str(), arg, self.alias),
            None => write!(f, "{}(*) AS {}", self.func.as_str(), self.alias),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_column_refs_binary() {
        let expr = Expression::binary(
            BinaryOp::And,
            Expression::binary(
                BinaryOp::Gt,
                Expression::column("age"),
                Expression::literal(Value::Int(30)),
            ),
            Expression::binary(
                BinaryOp::Eq,
                Expression::column("first"),
                Expression::column("last"),
            ),
        );

        assert_eq!(expr.column_refs(), vec!["age", "first", "last"]);
    }

    #[test]
    fn test_and_all() {
        assert!(Expression::and_all(Vec::new()).is_none());

        let single = Expression::and_all(vec![Expression::column("a")]).expect("非空");
        assert_eq!(single, Expression::column("a"));

        let folded = Expression::and_all(vec![
            Expression::column("a"),
            Expression::column("b"),
        ])
        .expect("非空");
        assert_eq!(folded.column_refs(), vec!["a", "b"]);
    }

    #[test]
    fn test_named_column_display() {
        assert_eq!(NamedColumn::column("id").to_string(), "id");

        let renamed = NamedColumn::new(Expression::column("id"), "emp_id");
        assert_eq!(renamed.to_string(), "id AS emp_id");
    }
}
