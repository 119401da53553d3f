//! Builtin function prototypes.
//!
//! Each line declares one C function the translator knows about before it has seen any user code,
//! usually together with the Go symbol that replaces it:
//!
//! ```text
//! double __builtin_fabs(double) -> darwin.Fabs
//! ```
//!
//! declares `__builtin_fabs` (a low-level function only found on macOS) and substitutes every call
//! with `github.com/elliotchance/c2go/darwin.Fabs`. The `-> <substitution>` clause is optional.
//!
//! ## Notes
//! - The grammar is documented on [`crate::prototype::parse_declaration`].
//! - Short shim names (`darwin.`, `linux.`, `noarch.`) are qualified by [`crate::lang::shims`].
//! - Prototypes have fixed arity: there is no vararg marker, so `printf()` declares zero parameters
//!   and every argument at a call site is passed through uncast.

/// The compiled-in prototype table, grouped by the header each function comes from.
pub const BUILTIN_PROTOTYPES: &[&str] = &[
    // darwin/assert.h
    "int __builtin_expect(int, int) -> darwin.BuiltinExpect",
    "bool __assert_rtn(const char*, const char*, int, const char*) -> darwin.AssertRtn",
    // darwin/ctype.h
    "uint32 __istype(__darwin_ct_rune_t, uint32) -> darwin.IsType",
    "__darwin_ct_rune_t __isctype(__darwin_ct_rune_t, uint32) -> darwin.IsCType",
    "__darwin_ct_rune_t __tolower(__darwin_ct_rune_t) -> darwin.ToLower",
    "__darwin_ct_rune_t __toupper(__darwin_ct_rune_t) -> darwin.ToUpper",
    "uint32 __maskrune(__darwin_ct_rune_t, uint32) -> darwin.MaskRune",
    // linux/ctype.h
    "const unsigned short int** __ctype_b_loc() -> linux.CtypeLoc",
    "int tolower(int) -> linux.ToLower",
    "int toupper(int) -> linux.ToUpper",
    // darwin/math.h
    "double __builtin_fabs(double) -> darwin.Fabs",
    "float __builtin_fabsf(float) -> darwin.Fabsf",
    "double __builtin_fabsl(double) -> darwin.Fabsl",
    "double __builtin_inf() -> darwin.Inf",
    "float __builtin_inff() -> darwin.Inff",
    "double __builtin_infl() -> darwin.Infl",
    "Double2 __sincospi_stret(double) -> darwin.SincospiStret",
    "Float2 __sincospif_stret(float) -> darwin.SincospifStret",
    "Double2 __sincos_stret(double) -> darwin.SincosStret",
    "Float2 __sincosf_stret(float) -> darwin.SincosfStret",
    // linux/assert.h
    "bool __assert_fail(const char*, const char*, unsigned int, const char*) -> linux.AssertFail",
    // math.h
    "double acos(double) -> math.Acos",
    "double asin(double) -> math.Asin",
    "double atan(double) -> math.Atan",
    "double atan2(double, double) -> math.Atan2",
    "double ceil(double) -> math.Ceil",
    "double cos(double) -> math.Cos",
    "double cosh(double) -> math.Cosh",
    "double exp(double) -> math.Exp",
    "double fabs(double) -> math.Abs",
    "double floor(double) -> math.Floor",
    "double fmod(double, double) -> math.Mod",
    "double ldexp(double, int) -> math.Ldexp",
    "double log(double) -> math.Log",
    "double log10(double) -> math.Log10",
    "double pow(double, double) -> math.Pow",
    "double sin(double) -> math.Sin",
    "double sinh(double) -> math.Sinh",
    "double sqrt(double) -> math.Sqrt",
    "double tan(double) -> math.Tan",
    "double tanh(double) -> math.Tanh",
    // stdio.h
    "int printf() -> fmt.Printf",
    "int scanf() -> fmt.Scanf",
    "int putchar(int) -> darwin.Putchar",
    "int puts(const char *) -> fmt.Println",
    "FILE* fopen(const char *, const char *) -> noarch.Fopen",
    "int fclose(FILE *) -> noarch.Fclose",
    // stdlib.h
    "int atoi(const char*) -> noarch.Atoi",
    "long strtol(const char *, char **, int) -> noarch.Strtol",
    // compiler intrinsics
    "uint32 __builtin_bswap32(uint32) -> darwin.BSwap32",
    "uint64 __builtin_bswap64(uint64) -> darwin.BSwap64",
];
