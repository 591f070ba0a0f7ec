/*!
# `PAUSE <seconds>[-<seconds>]`

## Purpose
Wait before running the next statement.

## Remarks
Seconds may have a fraction and are rounded down to whole milliseconds.
With two values separated by `-` a new duration is picked at random
from the inclusive range every time the statement runs. The order of the
two values doesn't matter. Negative values count as zero.

Each value must be a plain number. A unit or other suffix such as
`PAUSE 1.5s` is reported as an invalid duration and the line is skipped,
even though some older macro tools read the leading number and ignore
the rest.

## Example
```text
PAUSE 1.5
PAUSE 2-4
```

*/
