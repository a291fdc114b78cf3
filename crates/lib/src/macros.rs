/// Implement [FromInput][crate::input::FromInput] for a type by converting
/// some other parsed value.
///
/// If the conversion fails the input is rewound, and the error covers the
/// input the value was parsed from.
///
/// # Examples
///
/// ```
/// use lib::prelude::*;
///
/// #[derive(Debug)]
/// struct Span(u32, u32);
///
/// lib::from_input! {
///     Span from Split<'-', (u32, u32)> => |Split((start, end))| {
///         ensure!(start <= end, "{start} is past {end}");
///         Ok(Span(start, end))
///     }
/// }
///
/// let mut input = IStr::new(b"2-4\n5-1\n");
/// let span = input.line::<Span>()?;
/// assert_eq!((span.0, span.1), (2, 4));
///
/// let error = input.line::<Span>().unwrap_err();
/// assert_eq!(error.span(), 4..7);
/// # Ok::<_, anyhow::Error>(())
/// ```
#[macro_export]
macro_rules! from_input {
    ($out:ident from $ty:ty => |$pat:pat_param| $block:block) => {
        impl $crate::input::FromInput for $out {
            #[inline]
            fn try_from_input(
                p: &mut $crate::input::IStr,
            ) -> core::result::Result<Option<Self>, $crate::input::IStrError> {
                let start = *p;

                let Some(value) = <$ty as $crate::input::FromInput>::try_from_input(p)? else {
                    return Ok(None);
                };

                let convert = |$pat: $ty| -> core::result::Result<$out, $crate::macro_support::Error> {
                    $block
                };

                convert(value).map(Some).map_err(|error| {
                    let span = start.index()..p.index();
                    *p = start;
                    $crate::input::IStrError::new(span, $crate::input::ErrorKind::Boxed(error))
                })
            }
        }
    };
}

/// Declare the `main` function of a puzzle binary.
///
/// The solver is called with the input read from `inputs/<input>` in the
/// package being built, unless `--input <path>` is passed. If `expect` is
/// specified the answer is compared against it.
///
/// ```ignore
/// lib::entry!(input = "d01.txt", expect = (142, 142), solve);
///
/// fn solve(input: IStr) -> Result<(u32, u32)> {
///     todo!()
/// }
/// ```
#[macro_export]
macro_rules! entry {
    (input = $path:literal, expect = $expect:expr, $solve:path $(,)?) => {
        $crate::entry!(@main $path, Some($expect), $solve);
    };

    (input = $path:literal, $solve:path $(,)?) => {
        $crate::entry!(@main $path, None, $solve);
    };

    (@main $path:literal, $expect:expr, $solve:path) => {
        fn main() -> $crate::prelude::Result<()> {
            let opts = $crate::cli::Opts::parse()?;

            $crate::cli::run(
                &opts,
                concat!("inputs/", $path),
                concat!(env!("CARGO_MANIFEST_DIR"), "/inputs/", $path),
                $expect,
                $solve,
            )?;

            Ok(())
        }
    };
}
