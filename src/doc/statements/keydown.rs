/*!
# `KEYDOWN <key> <milliseconds>[-<milliseconds>]`

## Purpose
Hold a key down for a while then release it.

## Remarks
The key is always released before the next statement runs, so a
`KEYDOWN` can't be combined with another key. A range picks a new hold
time every time the statement runs.

Each value must be a plain number. `KEYDOWN A 100ms` is reported as an
invalid duration and the line is skipped, even though some older macro
tools read the leading number and ignore the rest.

## Example
```text
KEYDOWN W 2000
KEYDOWN SPACE 80-120
```

*/
